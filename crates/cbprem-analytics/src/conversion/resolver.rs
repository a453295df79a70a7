//! Day-level resolution of conversion prices across all instruments.

use std::collections::{BTreeMap, HashMap, HashSet};

use cbprem_core::types::ConversionPriceEvent;
use cbprem_core::{Date, InstrumentId};

use super::schedule::ConversionPriceSchedule;

/// The conversion prices in effect for every resolvable instrument on one
/// calendar day. At most one price per instrument by construction; never
/// mutated after the resolver emits it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionPriceSnapshot {
    day: Date,
    prices: HashMap<InstrumentId, f64>,
}

impl ConversionPriceSnapshot {
    /// The day this snapshot is valid for.
    #[must_use]
    pub fn day(&self) -> Date {
        self.day
    }

    /// The conversion price for an instrument, if it resolved.
    #[must_use]
    pub fn get(&self, instrument_id: &InstrumentId) -> Option<f64> {
        self.prices.get(instrument_id).copied()
    }

    /// Number of resolved instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether no instrument resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over (instrument, price) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentId, f64)> {
        self.prices.iter().map(|(id, price)| (id, *price))
    }
}

/// Resolves per-day conversion price snapshots from the full event history.
///
/// Construction partitions the events by instrument and builds one sorted
/// [`ConversionPriceSchedule`] each, once per session; `resolve` is then a
/// pure function of the day. Instruments whose events fail validation
/// (non-positive price) are excluded from every snapshot with a logged
/// diagnostic, isolating the bad instrument instead of failing the run.
#[derive(Debug, Clone)]
pub struct ConversionPriceResolver {
    schedules: HashMap<InstrumentId, ConversionPriceSchedule>,
    excluded: HashSet<InstrumentId>,
}

impl ConversionPriceResolver {
    /// Builds the resolver from the complete, unfiltered event history.
    #[must_use]
    pub fn from_events(events: &[ConversionPriceEvent]) -> Self {
        // BTreeMap keeps instrument iteration deterministic across runs.
        let mut by_instrument: BTreeMap<&InstrumentId, Vec<ConversionPriceEvent>> = BTreeMap::new();
        for event in events {
            by_instrument
                .entry(&event.instrument_id)
                .or_default()
                .push(event.clone());
        }

        let mut schedules = HashMap::new();
        let mut excluded = HashSet::new();
        for (instrument_id, events) in by_instrument {
            match ConversionPriceSchedule::from_events(instrument_id, &events) {
                Ok(schedule) => {
                    schedules.insert(instrument_id.clone(), schedule);
                }
                Err(e) => {
                    tracing::warn!(instrument_id = %instrument_id, error = %e, "instrument excluded from conversion price resolution");
                    excluded.insert(instrument_id.clone());
                }
            }
        }

        Self {
            schedules,
            excluded,
        }
    }

    /// Produces the snapshot of effective conversion prices for `day`.
    ///
    /// Deterministic and side-effect free: the same day always yields the
    /// same snapshot within a session, which is what makes day-keyed
    /// memoization safe. Instruments with no (valid) events are absent.
    #[must_use]
    pub fn resolve(&self, day: Date) -> ConversionPriceSnapshot {
        let prices = self
            .schedules
            .iter()
            .map(|(id, schedule)| (id.clone(), schedule.price_on(day)))
            .collect();
        ConversionPriceSnapshot { day, prices }
    }

    /// The per-instrument schedule, if the instrument resolved.
    #[must_use]
    pub fn schedule(&self, instrument_id: &InstrumentId) -> Option<&ConversionPriceSchedule> {
        self.schedules.get(instrument_id)
    }

    /// Instruments rejected at construction for invalid conversion prices.
    #[must_use]
    pub fn excluded(&self) -> &HashSet<InstrumentId> {
        &self.excluded
    }

    /// Number of resolvable instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether no instrument resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
