//! Snapshot command implementation.
//!
//! Shows the conversion prices effective on a given day across all
//! instruments.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cbprem_analytics::ConversionPriceResolver;
use cbprem_analytics::InstrumentLinker;
use cbprem_data::load_market_data;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::print_output;

/// Arguments for the snapshot command.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Directory holding the four input CSV tables
    #[arg(short, long)]
    pub data: PathBuf,

    /// Target day (YYYY-MM-DD)
    #[arg(long)]
    pub day: String,
}

/// One resolved conversion price as displayed.
#[derive(Debug, Serialize, Tabled)]
pub struct SnapshotRow {
    #[tabled(rename = "Instrument")]
    pub instrument_id: String,
    #[tabled(rename = "Name")]
    pub display_name: String,
    #[tabled(rename = "Conversion Price")]
    pub conversion_price: f64,
}

/// Execute the snapshot command.
pub fn execute(args: SnapshotArgs, format: OutputFormat) -> Result<()> {
    let day = parse_date(&args.day)?;
    let dataset = load_market_data(&args.data)?;

    let linker = InstrumentLinker::from_instruments(&dataset.instruments);
    let resolver = ConversionPriceResolver::from_events(&dataset.conversion_events);
    let snapshot = resolver.resolve(day);

    let mut rows: Vec<SnapshotRow> = snapshot
        .iter()
        .map(|(id, price)| SnapshotRow {
            instrument_id: id.to_string(),
            display_name: linker.display_name(id).unwrap_or("").to_string(),
            conversion_price: price,
        })
        .collect();
    rows.sort_by(|a, b| a.instrument_id.cmp(&b.instrument_id));

    print_output(&rows, format)
}
