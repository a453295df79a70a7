//! Summary command implementation.
//!
//! Period metrics for one instrument over a date window: cumulative bond
//! and equity returns and the latest premium rate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cbprem_analytics::summary::{
    bond_cumulative_return, equity_cumulative_return, latest_premium, slice_window,
};
use cbprem_analytics::{InstrumentLinker, PremiumPipeline};
use cbprem_core::InstrumentId;
use cbprem_data::load_market_data;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::commands::parse_date;
use crate::output::print_single;

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Directory holding the four input CSV tables
    #[arg(short, long)]
    pub data: PathBuf,

    /// Instrument identifier, or its display name with --by-name
    #[arg(short, long)]
    pub instrument: String,

    /// Look the instrument up by display name instead of identifier
    #[arg(long)]
    pub by_name: bool,

    /// Inclusive window start (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Inclusive window end (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,
}

/// Period summary for one instrument.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub instrument_id: String,
    pub display_name: Option<String>,
    pub rows: usize,
    /// Fractional bond close change over the window.
    pub bond_return: Option<f64>,
    /// Fractional equity close change over the window.
    pub equity_return: Option<f64>,
    /// Most recent premium rate in the window, in percent.
    pub latest_premium_rate: Option<f64>,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, format: OutputFormat) -> Result<()> {
    let from = parse_date(&args.from)?;
    let to = parse_date(&args.to)?;

    let dataset = load_market_data(&args.data)?;
    let pipeline = PremiumPipeline::new(&dataset);
    let rows = pipeline.run(&dataset);

    let instrument_id = resolve_instrument(pipeline.linker(), &args)?;
    let window = slice_window(&rows, &instrument_id, from, to)?;

    let result = SummaryResult {
        display_name: pipeline
            .linker()
            .display_name(&instrument_id)
            .map(str::to_string),
        instrument_id: instrument_id.to_string(),
        rows: window.len(),
        bond_return: bond_cumulative_return(&window),
        equity_return: equity_cumulative_return(&window),
        latest_premium_rate: latest_premium(&window),
    };

    print_single(&result, format)
}

fn resolve_instrument(linker: &InstrumentLinker, args: &SummaryArgs) -> Result<InstrumentId> {
    if args.by_name {
        linker
            .find_by_name(&args.instrument)
            .cloned()
            .ok_or_else(|| {
                CliError::InvalidArgument(format!("unknown display name '{}'", args.instrument))
                    .into()
            })
    } else {
        Ok(InstrumentId::new(args.instrument.clone()))
    }
}
