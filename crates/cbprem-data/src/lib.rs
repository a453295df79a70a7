//! # cbprem Data
//!
//! File-based table loading for the cbprem premium pipeline.
//!
//! The pipeline consumes four tables (typed by the core record structs);
//! this crate reads them from CSV files with fail-fast schema validation:
//! a missing column or an unparsable date surfaces as a descriptive
//! [`DataError`] before any pipeline work begins, rather than corrupting
//! the run downstream.
//!
//! ```no_run
//! use cbprem_data::load_market_data;
//!
//! let dataset = load_market_data("./data").unwrap();
//! println!("{} bond rows", dataset.bonds.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod tables;

pub use error::{DataError, DataResult};
pub use tables::{
    load_bond_series, load_conversion_events, load_equity_series, load_instruments,
    load_market_data,
};
