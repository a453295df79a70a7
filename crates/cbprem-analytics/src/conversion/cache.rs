//! Per-run memoization of daily conversion price snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use cbprem_core::Date;

use super::resolver::{ConversionPriceResolver, ConversionPriceSnapshot};

/// Day-keyed snapshot memo scoped to one pipeline run.
///
/// The same day is queried once per bond row falling on it, so the resolver
/// would otherwise run hundreds of times per day value. Keying by day alone
/// is sound because the resolver is a pure function of (day, events) and
/// events are immutable for the session. Snapshots are shared via `Arc`:
/// construct in place, write once, read many.
///
/// No eviction: the key space is bounded by the distinct trading days in
/// one load, a few hundred to a few thousand entries.
#[derive(Debug)]
pub struct SnapshotCache<'a> {
    resolver: &'a ConversionPriceResolver,
    by_day: HashMap<Date, Arc<ConversionPriceSnapshot>>,
}

impl<'a> SnapshotCache<'a> {
    /// Creates an empty cache backed by `resolver`.
    #[must_use]
    pub fn new(resolver: &'a ConversionPriceResolver) -> Self {
        Self {
            resolver,
            by_day: HashMap::new(),
        }
    }

    /// Returns the snapshot for `day`, computing it on first access.
    pub fn get(&mut self, day: Date) -> Arc<ConversionPriceSnapshot> {
        Arc::clone(
            self.by_day
                .entry(day)
                .or_insert_with(|| Arc::new(self.resolver.resolve(day))),
        )
    }

    /// Number of distinct days computed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    /// Whether no day has been computed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
