//! Error types for the premium pipeline.

use cbprem_core::{Date, InstrumentId};
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// The error type for premium pipeline operations.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// A conversion price event carries a non-positive or non-finite price.
    ///
    /// Conversion prices are denominators; a zero would turn into a silent
    /// division blow-up far from the bad row, so the offending instrument is
    /// rejected at schedule construction instead.
    #[error(
        "invalid conversion price {price} for {instrument_id} effective {effective_date}"
    )]
    InvalidConversionPrice {
        /// Instrument whose event is malformed.
        instrument_id: InstrumentId,
        /// Effective date of the malformed event.
        effective_date: Date,
        /// The offending price value.
        price: f64,
    },

    /// A schedule was requested for an instrument with zero events.
    ///
    /// The resolver treats such instruments as unresolved and never builds
    /// a schedule for them; constructing one directly is a caller bug.
    #[error("no conversion price events for {instrument_id}")]
    EmptySchedule {
        /// Instrument without any events.
        instrument_id: InstrumentId,
    },

    /// A summary window with reversed bounds.
    #[error("invalid window: {from} is after {to}")]
    InvalidWindow {
        /// Inclusive start of the window.
        from: Date,
        /// Inclusive end of the window.
        to: Date,
    },
}
