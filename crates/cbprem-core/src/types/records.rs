//! Row types of the four input tables and the enriched output series.
//!
//! Price and volume fields are `Option<f64>`: daily series routinely carry
//! gaps (halted instruments, partial history) and the pipeline treats a
//! missing value as data to tolerate, not an error.

use serde::{Deserialize, Serialize};

use super::{Date, EquityCode, InstrumentId};

/// One historical change of the contractual conversion price for a bond.
///
/// Events are immutable once loaded; an instrument accumulates several of
/// these over its life as the issuer resets the conversion terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionPriceEvent {
    /// Bond the change applies to.
    pub instrument_id: InstrumentId,
    /// First day the new price is contractually effective.
    pub effective_date: Date,
    /// The conversion price after the change.
    pub price: f64,
}

/// One trading day of a convertible bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Trading day.
    pub day: Date,
    /// Bond identifier.
    pub instrument_id: InstrumentId,
    /// Opening price.
    pub open: Option<f64>,
    /// Intraday high.
    pub high: Option<f64>,
    /// Intraday low.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
}

/// One trading day of an underlying equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityRecord {
    /// Trading day.
    pub day: Date,
    /// Equity ticker code.
    pub equity_code: EquityCode,
    /// Listed name of the equity.
    pub name: String,
    /// Opening price.
    pub open: Option<f64>,
    /// Intraday high.
    pub high: Option<f64>,
    /// Intraday low.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
}

/// Static metadata for one convertible bond: its underlying equity and
/// display name. The bond-to-equity relationship is 1:1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    /// Bond identifier.
    pub instrument_id: InstrumentId,
    /// Underlying equity ticker code.
    pub equity_code: EquityCode,
    /// Human-readable name shown in summaries.
    pub display_name: String,
}

/// A [`BondRecord`] enriched with the linked equity close/volume and the
/// derived premium rate. This is the pipeline's output schema; consumers
/// read it, never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBondRecord {
    /// Trading day.
    pub day: Date,
    /// Bond identifier.
    pub instrument_id: InstrumentId,
    /// Opening price.
    pub open: Option<f64>,
    /// Intraday high.
    pub high: Option<f64>,
    /// Intraday low.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
    /// Closing price of the linked equity on the same day, if any.
    pub equity_close: Option<f64>,
    /// Traded volume of the linked equity on the same day, if any.
    pub equity_volume: Option<f64>,
    /// Conversion premium in percent. `None` when the bond close, equity
    /// close, or the day's resolved conversion price is unavailable.
    pub premium_rate: Option<f64>,
}

impl EnrichedBondRecord {
    /// Builds the enriched row from a bond record with the equity fields
    /// and premium still unset.
    #[must_use]
    pub fn from_bond(bond: BondRecord) -> Self {
        Self {
            day: bond.day,
            instrument_id: bond.instrument_id,
            open: bond.open,
            high: bond.high,
            low: bond.low,
            close: bond.close,
            volume: bond.volume,
            equity_close: None,
            equity_volume: None,
            premium_rate: None,
        }
    }
}

/// The fully materialized input tables for one pipeline run.
///
/// Everything is loaded up front in a batch (spreadsheet export, CSV dump)
/// and held in memory for the session; the pipeline never touches I/O.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDataSet {
    /// Static bond metadata (bond to equity linkage, display names).
    pub instruments: Vec<InstrumentInfo>,
    /// Daily convertible bond series.
    pub bonds: Vec<BondRecord>,
    /// Daily underlying equity series.
    pub equities: Vec<EquityRecord>,
    /// Conversion price change history across all instruments.
    pub conversion_events: Vec<ConversionPriceEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_enriched_from_bond_carries_prices() {
        let bond = BondRecord {
            day: date(2024, 5, 6),
            instrument_id: InstrumentId::new("113050"),
            open: Some(101.0),
            high: Some(103.5),
            low: Some(100.2),
            close: Some(102.8),
            volume: Some(183_000.0),
        };
        let row = EnrichedBondRecord::from_bond(bond.clone());
        assert_eq!(row.day, bond.day);
        assert_eq!(row.close, Some(102.8));
        assert_eq!(row.equity_close, None);
        assert_eq!(row.premium_rate, None);
    }
}
