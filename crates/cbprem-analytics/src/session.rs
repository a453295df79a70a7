//! Session-scoped result caching with coarse time-based expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cbprem_core::types::{EnrichedBondRecord, MarketDataSet};

use crate::pipeline::PremiumPipeline;

/// Owns the loaded tables and the enriched output for one session.
///
/// The whole pipeline reruns when the time-to-live lapses or on explicit
/// [`invalidate`](Self::invalidate); there is no incremental recomputation
/// and no partial invalidation by instrument or day. This replaces an
/// ambient process-wide cache with an object the caller owns.
#[derive(Debug)]
pub struct SessionStore {
    dataset: MarketDataSet,
    ttl: Duration,
    cached: Option<CachedRun>,
}

#[derive(Debug)]
struct CachedRun {
    rows: Arc<Vec<EnrichedBondRecord>>,
    computed_at: Instant,
}

impl SessionStore {
    /// Default time-to-live of the enriched output.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

    /// Creates a store with an explicit time-to-live.
    #[must_use]
    pub fn new(dataset: MarketDataSet, ttl: Duration) -> Self {
        Self {
            dataset,
            ttl,
            cached: None,
        }
    }

    /// Creates a store with the default one-hour time-to-live.
    #[must_use]
    pub fn with_default_ttl(dataset: MarketDataSet) -> Self {
        Self::new(dataset, Self::DEFAULT_TTL)
    }

    /// The tables this session holds.
    #[must_use]
    pub fn dataset(&self) -> &MarketDataSet {
        &self.dataset
    }

    /// Returns the enriched series, rerunning the pipeline if the cached
    /// result is absent or expired.
    pub fn get(&mut self) -> Arc<Vec<EnrichedBondRecord>> {
        if !self.is_stale() {
            if let Some(run) = &self.cached {
                return Arc::clone(&run.rows);
            }
        }

        tracing::debug!("session cache stale; rerunning premium pipeline");
        let rows = Arc::new(PremiumPipeline::new(&self.dataset).run(&self.dataset));
        self.cached = Some(CachedRun {
            rows: Arc::clone(&rows),
            computed_at: Instant::now(),
        });
        rows
    }

    /// Whether the next [`get`](Self::get) will rerun the pipeline.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.cached
            .as_ref()
            .map(|run| run.computed_at.elapsed() > self.ttl)
            .unwrap_or(true)
    }

    /// Drops the cached result; the next [`get`](Self::get) recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Replaces the tables and drops the cached result.
    pub fn replace_dataset(&mut self, dataset: MarketDataSet) {
        self.dataset = dataset;
        self.invalidate();
    }
}
