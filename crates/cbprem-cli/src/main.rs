//! cbprem CLI - Convertible bond premium analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Enrich the bond series with equity closes and premium rates
//! cbprem enrich --data ./data --format csv
//!
//! # Show the conversion prices effective on a day
//! cbprem snapshot --data ./data --day 2024-05-06
//!
//! # One-off premium calculation
//! cbprem premium --bond 110 --equity 100 --conversion 50
//!
//! # Period summary for one instrument
//! cbprem summary --data ./data --instrument 113050 --from 2024-01-02 --to 2024-03-29
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,cbprem=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Enrich(args) => commands::enrich::execute(args, format)?,
        Commands::Snapshot(args) => commands::snapshot::execute(args, format)?,
        Commands::Premium(args) => commands::premium::execute(args, format)?,
        Commands::Summary(args) => commands::summary::execute(args, format)?,
    }

    Ok(())
}
