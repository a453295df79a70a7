//! # cbprem Core
//!
//! Core types for the cbprem convertible bond premium analytics library.
//!
//! This crate provides the foundational building blocks used throughout cbprem:
//!
//! - **Types**: Domain-specific types like `Date`, `InstrumentId`, `EquityCode`
//! - **Records**: The row types of the four input tables and the enriched output
//! - **Errors**: Structured error handling with context
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing bond and equity identifiers
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use cbprem_core::prelude::*;
//!
//! let day = Date::from_ymd(2025, 6, 15).unwrap();
//! let id = InstrumentId::new("113050");
//! assert_eq!(id.as_str(), "113050");
//! assert_eq!(day.year(), 2025);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BondRecord, ConversionPriceEvent, Date, EnrichedBondRecord, EquityCode, EquityRecord,
        InstrumentId, InstrumentInfo, MarketDataSet,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, EquityCode, InstrumentId};
