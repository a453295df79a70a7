//! End-to-end tests of the premium enrichment pipeline.

use approx::assert_relative_eq;

use cbprem_analytics::prelude::*;
use cbprem_core::types::{
    BondRecord, ConversionPriceEvent, EquityRecord, InstrumentInfo, MarketDataSet,
};
use cbprem_core::{Date, EquityCode, InstrumentId};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn info(id: &str, equity: &str, name: &str) -> InstrumentInfo {
    InstrumentInfo {
        instrument_id: InstrumentId::new(id),
        equity_code: EquityCode::new(equity),
        display_name: name.to_string(),
    }
}

fn bond(id: &str, y: i32, m: u32, d: u32, close: Option<f64>) -> BondRecord {
    BondRecord {
        day: date(y, m, d),
        instrument_id: InstrumentId::new(id),
        open: close.map(|c| c - 1.0),
        high: close.map(|c| c + 1.0),
        low: close.map(|c| c - 2.0),
        close,
        volume: Some(25_000.0),
    }
}

fn equity(code: &str, y: i32, m: u32, d: u32, close: Option<f64>) -> EquityRecord {
    EquityRecord {
        day: date(y, m, d),
        equity_code: EquityCode::new(code),
        name: format!("Equity {code}"),
        open: close.map(|c| c - 0.1),
        high: close.map(|c| c + 0.1),
        low: close.map(|c| c - 0.2),
        close,
        volume: Some(3_000_000.0),
    }
}

fn cp(id: &str, y: i32, m: u32, d: u32, price: f64) -> ConversionPriceEvent {
    ConversionPriceEvent {
        instrument_id: InstrumentId::new(id),
        effective_date: date(y, m, d),
        price,
    }
}

/// Two instruments over three days, one conversion price reset in the
/// middle, one day predating all events for the second instrument.
fn sample_dataset() -> MarketDataSet {
    MarketDataSet {
        instruments: vec![
            info("113050", "601958", "Nanyin CB"),
            info("128136", "002737", "Kelun CB"),
        ],
        bonds: vec![
            bond("113050", 2024, 5, 6, Some(110.0)),
            bond("113050", 2024, 5, 7, Some(112.0)),
            bond("113050", 2024, 5, 8, Some(111.0)),
            bond("128136", 2024, 5, 6, Some(120.0)),
            bond("128136", 2024, 5, 7, Some(121.0)),
        ],
        equities: vec![
            equity("601958", 2024, 5, 6, Some(100.0)),
            equity("601958", 2024, 5, 7, Some(102.0)),
            equity("601958", 2024, 5, 8, Some(101.0)),
            equity("002737", 2024, 5, 6, Some(8.0)),
            equity("002737", 2024, 5, 7, Some(8.2)),
        ],
        conversion_events: vec![
            // 113050: reset effective on the 7th.
            cp("113050", 2023, 11, 20, 50.0),
            cp("113050", 2024, 5, 7, 40.0),
            // 128136: single event, dated after the first bond day.
            cp("128136", 2024, 5, 7, 10.0),
        ],
    }
}

#[test]
fn test_temporal_resolution_across_reset() {
    let data = sample_dataset();
    let rows = PremiumPipeline::new(&data).run(&data);

    // Day before the reset: old price 50 applies.
    // value = (100 / 50) * 100 = 200; (110 - 200) / 200 * 100 = -45
    assert_relative_eq!(rows[0].premium_rate.unwrap(), -45.0);

    // Reset day itself counts as effective ("at or before").
    // value = (102 / 40) * 100 = 255; (112 - 255) / 255 * 100
    assert_relative_eq!(
        rows[1].premium_rate.unwrap(),
        (112.0 - 255.0) / 255.0 * 100.0
    );

    // After the reset the new price persists.
    // value = (101 / 40) * 100 = 252.5
    assert_relative_eq!(
        rows[2].premium_rate.unwrap(),
        (111.0 - 252.5) / 252.5 * 100.0
    );
}

#[test]
fn test_single_event_effective_before_its_date() {
    let data = sample_dataset();
    let rows = PremiumPipeline::new(&data).run(&data);

    // 128136's only event is dated 2024-05-07, but its price applies on the
    // 6th too: a single event is treated as always effective.
    // value = (8 / 10) * 100 = 80; (120 - 80) / 80 * 100 = 50
    assert_relative_eq!(rows[3].premium_rate.unwrap(), 50.0);
}

#[test]
fn test_fallback_to_earliest_with_multiple_events() {
    // Both events postdate the queried day; the earliest price is used even
    // though it was not yet effective (early-history tolerance).
    let resolver = ConversionPriceResolver::from_events(&[
        cp("113050", 2024, 6, 1, 50.0),
        cp("113050", 2024, 9, 1, 40.0),
    ]);
    let snapshot = resolver.resolve(date(2024, 5, 31));
    assert_eq!(snapshot.get(&InstrumentId::new("113050")), Some(50.0));
}

#[test]
fn test_left_join_preserves_every_bond_row() {
    let mut data = sample_dataset();
    // Drop all equity rows for 002737: its bond rows must survive with
    // null equity fields and unset premium.
    data.equities.retain(|e| e.equity_code != EquityCode::new("002737"));

    let rows = PremiumPipeline::new(&data).run(&data);
    assert_eq!(rows.len(), data.bonds.len());

    let kelun: Vec<_> = rows
        .iter()
        .filter(|r| r.instrument_id == InstrumentId::new("128136"))
        .collect();
    assert_eq!(kelun.len(), 2);
    for row in kelun {
        assert_eq!(row.equity_close, None);
        assert_eq!(row.equity_volume, None);
        assert_eq!(row.premium_rate, None);
        assert!(row.close.is_some());
    }
}

#[test]
fn test_invalid_conversion_price_isolates_instrument() {
    let mut data = sample_dataset();
    data.conversion_events.push(cp("128136", 2024, 1, 1, 0.0));

    let pipeline = PremiumPipeline::new(&data);
    assert!(pipeline
        .resolver()
        .excluded()
        .contains(&InstrumentId::new("128136")));

    let rows = pipeline.run(&data);
    // Bad instrument's rows survive, unpriced; the good instrument still prices.
    for row in &rows {
        if row.instrument_id == InstrumentId::new("128136") {
            assert_eq!(row.premium_rate, None);
        } else {
            assert!(row.premium_rate.is_some());
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let data = sample_dataset();
    let pipeline = PremiumPipeline::new(&data);
    let first = pipeline.run(&data);
    let second = pipeline.run(&data);
    assert_eq!(first, second);

    // A freshly constructed pipeline over the same tables agrees too.
    let third = PremiumPipeline::new(&data).run(&data);
    assert_eq!(first, third);
}

#[test]
fn test_snapshot_computed_once_per_distinct_day() {
    let data = sample_dataset();
    let pipeline = PremiumPipeline::new(&data);
    let mut cache = SnapshotCache::new(pipeline.resolver());
    for bond in &data.bonds {
        cache.get(bond.day);
    }
    // Five bond rows but only three distinct days.
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_summary_over_enriched_window() {
    let data = sample_dataset();
    let rows = PremiumPipeline::new(&data).run(&data);

    let window = slice_window(
        &rows,
        &InstrumentId::new("113050"),
        date(2024, 5, 6),
        date(2024, 5, 8),
    )
    .unwrap();
    assert_eq!(window.len(), 3);

    // (111 - 110) / 110
    assert_relative_eq!(
        bond_cumulative_return(&window).unwrap(),
        (111.0 - 110.0) / 110.0
    );
    // (101 - 100) / 100
    assert_relative_eq!(equity_cumulative_return(&window).unwrap(), 0.01);
    // Latest premium is the 8th's.
    assert_relative_eq!(
        latest_premium(&window).unwrap(),
        (111.0 - 252.5) / 252.5 * 100.0
    );
}
