//! Domain types for convertible bond premium analytics.

mod date;
mod ids;
mod records;

pub use date::Date;
pub use ids::{EquityCode, InstrumentId};
pub use records::{
    BondRecord, ConversionPriceEvent, EnrichedBondRecord, EquityRecord, InstrumentInfo,
    MarketDataSet,
};
