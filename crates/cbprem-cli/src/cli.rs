//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{EnrichArgs, PremiumArgs, SnapshotArgs, SummaryArgs};

/// cbprem - Convertible bond premium analytics CLI
#[derive(Parser)]
#[command(name = "cbprem")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Enrich the bond daily series with equity closes and premium rates
    Enrich(EnrichArgs),

    /// Show the conversion prices effective on a given day
    Snapshot(SnapshotArgs),

    /// Calculate a single premium rate from raw prices
    Premium(PremiumArgs),

    /// Summarize one instrument over a date window
    Summary(SummaryArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
