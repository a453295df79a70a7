//! Window slicing and period summary metrics over the enriched series.

use cbprem_core::types::EnrichedBondRecord;
use cbprem_core::{Date, InstrumentId};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Selects one instrument's rows inside an inclusive date window, sorted
/// ascending by day.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidWindow`] if `from` is after `to`.
pub fn slice_window(
    rows: &[EnrichedBondRecord],
    instrument_id: &InstrumentId,
    from: Date,
    to: Date,
) -> AnalyticsResult<Vec<EnrichedBondRecord>> {
    if from > to {
        return Err(AnalyticsError::InvalidWindow { from, to });
    }
    let mut window: Vec<EnrichedBondRecord> = rows
        .iter()
        .filter(|row| row.instrument_id == *instrument_id && row.day >= from && row.day <= to)
        .cloned()
        .collect();
    window.sort_by_key(|row| row.day);
    Ok(window)
}

/// Fractional change from the first to the last value of a series:
/// `(last - first) / first`.
///
/// `None` on an empty series, or when the first value is zero (the change
/// is undefined rather than infinite).
#[must_use]
pub fn cumulative_return(series: &[f64]) -> Option<f64> {
    let first = *series.first()?;
    let last = *series.last()?;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first)
}

/// The bond-close cumulative return over a day-ordered window, using the
/// rows where the close is present.
#[must_use]
pub fn bond_cumulative_return(window: &[EnrichedBondRecord]) -> Option<f64> {
    let closes: Vec<f64> = window.iter().filter_map(|row| row.close).collect();
    cumulative_return(&closes)
}

/// The equity-close cumulative return over a day-ordered window, using the
/// rows where the linked equity close is present.
#[must_use]
pub fn equity_cumulative_return(window: &[EnrichedBondRecord]) -> Option<f64> {
    let closes: Vec<f64> = window.iter().filter_map(|row| row.equity_close).collect();
    cumulative_return(&closes)
}

/// The most recent premium rate in a day-ordered window, skipping rows
/// where it is unset.
#[must_use]
pub fn latest_premium(window: &[EnrichedBondRecord]) -> Option<f64> {
    window.iter().rev().find_map(|row| row.premium_rate)
}
