//! Enrich command implementation.
//!
//! Runs the full premium pipeline over a data directory and emits the
//! enriched bond series.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use cbprem_analytics::PremiumPipeline;
use cbprem_core::types::EnrichedBondRecord;
use cbprem_data::load_market_data;

use crate::cli::OutputFormat;
use crate::output::{fmt_opt, print_output};

/// Arguments for the enrich command.
#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// Directory holding the four input CSV tables
    #[arg(short, long)]
    pub data: PathBuf,

    /// Write the enriched series to a CSV file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// One enriched row as displayed.
#[derive(Debug, Serialize, Tabled)]
pub struct EnrichedRow {
    #[tabled(rename = "Day")]
    pub day: String,
    #[tabled(rename = "Instrument")]
    pub instrument_id: String,
    #[tabled(rename = "Close", display_with = "fmt_opt")]
    pub close: Option<f64>,
    #[tabled(rename = "Equity Close", display_with = "fmt_opt")]
    pub equity_close: Option<f64>,
    #[tabled(rename = "Equity Volume", display_with = "fmt_opt")]
    pub equity_volume: Option<f64>,
    #[tabled(rename = "Premium %", display_with = "fmt_opt")]
    pub premium_rate: Option<f64>,
}

impl From<&EnrichedBondRecord> for EnrichedRow {
    fn from(record: &EnrichedBondRecord) -> Self {
        Self {
            day: record.day.to_string(),
            instrument_id: record.instrument_id.to_string(),
            close: record.close,
            equity_close: record.equity_close,
            equity_volume: record.equity_volume,
            premium_rate: record.premium_rate,
        }
    }
}

/// Execute the enrich command.
pub fn execute(args: EnrichArgs, format: OutputFormat) -> Result<()> {
    let dataset = load_market_data(&args.data)?;
    let rows = PremiumPipeline::new(&dataset).run(&dataset);

    if let Some(out) = args.out {
        let mut wtr = csv::Writer::from_path(&out)?;
        for row in &rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        tracing::info!(rows = rows.len(), path = %out.display(), "enriched series written");
        return Ok(());
    }

    let display: Vec<EnrichedRow> = rows.iter().map(EnrichedRow::from).collect();
    print_output(&display, format)
}
