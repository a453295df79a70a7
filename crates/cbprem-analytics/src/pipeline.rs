//! The end-to-end premium enrichment pipeline.

use std::collections::HashSet;

use cbprem_core::types::{EnrichedBondRecord, MarketDataSet};
use cbprem_core::InstrumentId;

use crate::conversion::{ConversionPriceResolver, SnapshotCache};
use crate::linker::InstrumentLinker;
use crate::merge::merge_equity_close;
use crate::premium::premium_rate;

/// Sequences linkage, merge, conversion price resolution, and premium
/// computation into the enriched bond series.
///
/// The pipeline is a single-threaded batch transformation over fully
/// materialized tables; a run always completes, there is no cancellation
/// path. Rows that cannot be priced (no equity link, no equity row,
/// instrument absent from the day's snapshot) come through with
/// `premium_rate = None` rather than aborting the run.
#[derive(Debug)]
pub struct PremiumPipeline {
    linker: InstrumentLinker,
    resolver: ConversionPriceResolver,
}

impl PremiumPipeline {
    /// Builds the linkage and conversion schedules for a dataset.
    #[must_use]
    pub fn new(dataset: &MarketDataSet) -> Self {
        Self {
            linker: InstrumentLinker::from_instruments(&dataset.instruments),
            resolver: ConversionPriceResolver::from_events(&dataset.conversion_events),
        }
    }

    /// The bond-to-equity linkage in use.
    #[must_use]
    pub fn linker(&self) -> &InstrumentLinker {
        &self.linker
    }

    /// The conversion price resolver in use.
    #[must_use]
    pub fn resolver(&self) -> &ConversionPriceResolver {
        &self.resolver
    }

    /// Runs the pipeline and returns the enriched series.
    ///
    /// Output order follows the bond table's row order, and the result is a
    /// pure function of the dataset: two runs over identical tables yield
    /// equal outputs.
    #[must_use]
    pub fn run(&self, dataset: &MarketDataSet) -> Vec<EnrichedBondRecord> {
        let mut rows = merge_equity_close(&dataset.bonds, &dataset.equities, &self.linker);

        // Resolve each row's conversion price as a column, one snapshot per
        // distinct day, then apply the premium formula across the column.
        let mut cache = SnapshotCache::new(&self.resolver);
        let mut unresolved: HashSet<InstrumentId> = HashSet::new();
        let conversion_prices: Vec<Option<f64>> = rows
            .iter()
            .map(|row| {
                let price = cache.get(row.day).get(&row.instrument_id);
                if price.is_none() && unresolved.insert(row.instrument_id.clone()) {
                    tracing::debug!(instrument_id = %row.instrument_id, "no conversion price; premium left unset");
                }
                price
            })
            .collect();

        for (row, conversion_price) in rows.iter_mut().zip(conversion_prices) {
            row.premium_rate = match (row.close, row.equity_close, conversion_price) {
                (Some(bond_close), Some(equity_close), Some(price)) => {
                    Some(premium_rate(bond_close, equity_close, price))
                }
                _ => None,
            };
        }

        tracing::info!(
            rows = rows.len(),
            distinct_days = cache.len(),
            unresolved_instruments = unresolved.len(),
            "premium pipeline completed"
        );
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cbprem_core::types::{
        BondRecord, ConversionPriceEvent, EquityRecord, InstrumentInfo,
    };
    use cbprem_core::{Date, EquityCode, InstrumentId};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn dataset() -> MarketDataSet {
        MarketDataSet {
            instruments: vec![InstrumentInfo {
                instrument_id: InstrumentId::new("113050"),
                equity_code: EquityCode::new("601958"),
                display_name: "Nanyin CB".to_string(),
            }],
            bonds: vec![BondRecord {
                day: date(2024, 5, 6),
                instrument_id: InstrumentId::new("113050"),
                open: Some(109.0),
                high: Some(111.0),
                low: Some(108.5),
                close: Some(110.0),
                volume: Some(50_000.0),
            }],
            equities: vec![EquityRecord {
                day: date(2024, 5, 6),
                equity_code: EquityCode::new("601958"),
                name: "Nanyin".to_string(),
                open: Some(99.0),
                high: Some(101.0),
                low: Some(98.0),
                close: Some(100.0),
                volume: Some(2_000_000.0),
            }],
            conversion_events: vec![ConversionPriceEvent {
                instrument_id: InstrumentId::new("113050"),
                effective_date: date(2023, 11, 20),
                price: 50.0,
            }],
        }
    }

    #[test]
    fn test_end_to_end_premium() {
        let data = dataset();
        let rows = PremiumPipeline::new(&data).run(&data);
        assert_eq!(rows.len(), 1);
        // (100 / 50) * 100 = 200; (110 - 200) / 200 * 100 = -45
        assert_relative_eq!(rows[0].premium_rate.unwrap(), -45.0);
    }

    #[test]
    fn test_missing_equity_close_leaves_premium_unset() {
        let mut data = dataset();
        data.equities[0].close = None;
        let rows = PremiumPipeline::new(&data).run(&data);
        assert_eq!(rows[0].equity_close, None);
        assert_eq!(rows[0].premium_rate, None);
    }

    #[test]
    fn test_zero_equity_close_takes_degenerate_guard() {
        // A present zero is a legitimate edge, distinct from missing data.
        let mut data = dataset();
        data.equities[0].close = Some(0.0);
        let rows = PremiumPipeline::new(&data).run(&data);
        assert_eq!(rows[0].premium_rate, Some(0.0));
    }

    #[test]
    fn test_instrument_without_events_gets_none() {
        let mut data = dataset();
        data.conversion_events.clear();
        let rows = PremiumPipeline::new(&data).run(&data);
        assert_eq!(rows[0].premium_rate, None);
    }
}
