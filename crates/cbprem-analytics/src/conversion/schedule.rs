//! Per-instrument conversion price schedule with as-of lookup.

use cbprem_core::types::ConversionPriceEvent;
use cbprem_core::{Date, InstrumentId};

use crate::error::{AnalyticsError, AnalyticsResult};

/// The dated conversion price history of one instrument, sorted ascending
/// by effective date.
///
/// Lookup is a binary search for the rightmost entry at or before the
/// target day. A day earlier than every known change resolves to the
/// earliest entry anyway: incomplete early history is tolerated by using
/// the first known price even though it was not yet contractually
/// effective. An instrument with a single event therefore has that price
/// on every day.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionPriceSchedule {
    entries: Vec<(Date, f64)>,
}

impl ConversionPriceSchedule {
    /// Builds the schedule from one instrument's events.
    ///
    /// Events may arrive in any order; they are sorted by effective date
    /// here. Two events sharing a date should not occur in well-formed
    /// input; if they do, the later one in input order wins.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidConversionPrice`] if any event
    /// carries a non-positive or non-finite price, and
    /// [`AnalyticsError::EmptySchedule`] if `events` is empty.
    pub fn from_events(
        instrument_id: &InstrumentId,
        events: &[ConversionPriceEvent],
    ) -> AnalyticsResult<Self> {
        if events.is_empty() {
            return Err(AnalyticsError::EmptySchedule {
                instrument_id: instrument_id.clone(),
            });
        }

        for event in events {
            if !(event.price.is_finite() && event.price > 0.0) {
                return Err(AnalyticsError::InvalidConversionPrice {
                    instrument_id: instrument_id.clone(),
                    effective_date: event.effective_date,
                    price: event.price,
                });
            }
        }

        let mut entries: Vec<(Date, f64)> = events
            .iter()
            .map(|e| (e.effective_date, e.price))
            .collect();
        // Stable: equal-dated events keep input order, so the last wins in lookup.
        entries.sort_by_key(|(date, _)| *date);

        Ok(Self { entries })
    }

    /// Returns the conversion price in effect on `day`.
    ///
    /// The rightmost entry with `effective_date <= day`, or the earliest
    /// entry when the day predates all changes (see the type-level note).
    #[must_use]
    pub fn price_on(&self, day: Date) -> f64 {
        let idx = self.entries.partition_point(|(date, _)| *date <= day);
        if idx == 0 {
            self.entries[0].1
        } else {
            self.entries[idx - 1].1
        }
    }

    /// Number of change events in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries. Never true for a constructed
    /// schedule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective date of the earliest known change.
    #[must_use]
    pub fn earliest_date(&self) -> Date {
        self.entries[0].0
    }
}
