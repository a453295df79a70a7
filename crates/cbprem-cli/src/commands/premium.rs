//! Premium command implementation.
//!
//! One-off premium rate calculation from raw prices.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cbprem_analytics::{conversion_value, premium_rate};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::print_single;

/// Arguments for the premium command.
#[derive(Args, Debug)]
pub struct PremiumArgs {
    /// Bond closing price
    #[arg(short, long)]
    pub bond: f64,

    /// Equity closing price
    #[arg(short, long)]
    pub equity: f64,

    /// Conversion price in effect
    #[arg(short, long)]
    pub conversion: f64,
}

/// Premium calculation result.
#[derive(Debug, Serialize)]
pub struct PremiumResult {
    pub bond_price: f64,
    pub equity_price: f64,
    pub conversion_price: f64,
    pub conversion_value: f64,
    pub premium_rate: f64,
}

/// Execute the premium command.
pub fn execute(args: PremiumArgs, format: OutputFormat) -> Result<()> {
    if !(args.conversion.is_finite() && args.conversion > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "conversion price must be positive, got {}",
            args.conversion
        ))
        .into());
    }

    let result = PremiumResult {
        bond_price: args.bond,
        equity_price: args.equity,
        conversion_price: args.conversion,
        conversion_value: conversion_value(args.equity, args.conversion),
        premium_rate: premium_rate(args.bond, args.equity, args.conversion),
    };

    print_single(&result, format)
}
