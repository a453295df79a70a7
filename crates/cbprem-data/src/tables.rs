//! CSV loaders for the four pipeline input tables.
//!
//! File layout of a data directory:
//!
//! | File                    | Table                    |
//! |-------------------------|--------------------------|
//! | `instruments.csv`       | bond metadata / linkage  |
//! | `bond_daily.csv`        | convertible bond series  |
//! | `equity_daily.csv`      | underlying equity series |
//! | `conversion_prices.csv` | conversion price events  |

use std::path::Path;

use serde::Deserialize;

use cbprem_core::types::{
    BondRecord, ConversionPriceEvent, EquityRecord, InstrumentInfo, MarketDataSet,
};
use cbprem_core::{Date, EquityCode, InstrumentId};

use crate::error::{DataError, DataResult};

/// CSV record for instrument metadata.
#[derive(Debug, Deserialize)]
struct InstrumentRow {
    instrument_id: String,
    equity_code: String,
    display_name: String,
}

/// CSV record for the bond daily series.
#[derive(Debug, Deserialize)]
struct BondRow {
    day: Date,
    instrument_id: String,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
}

/// CSV record for the equity daily series.
#[derive(Debug, Deserialize)]
struct EquityRow {
    day: Date,
    equity_code: String,
    name: String,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
}

/// CSV record for conversion price change events.
#[derive(Debug, Deserialize)]
struct ConversionPriceRow {
    instrument_id: String,
    effective_date: Date,
    price: f64,
}

fn open_reader(table: &str, path: &Path) -> DataResult<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(|e| match e.kind() {
        csv::ErrorKind::Io(_) => DataError::io(path.display().to_string(), e.to_string()),
        _ => DataError::parse(table, e.to_string()),
    })
}

/// Validates that every required column is present in the header row.
fn require_columns(
    table: &str,
    reader: &mut csv::Reader<std::fs::File>,
    required: &[&str],
) -> DataResult<()> {
    let headers = reader
        .headers()
        .map_err(|e| DataError::parse(table, e.to_string()))?;
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(DataError::schema(table, format!("missing column '{col}'")));
        }
    }
    Ok(())
}

fn require_id(table: &str, field: &str, value: &str, record: usize) -> DataResult<()> {
    if value.trim().is_empty() {
        return Err(DataError::parse(
            table,
            format!("blank {field} in record {record}"),
        ));
    }
    Ok(())
}

/// Loads the instrument metadata table.
///
/// # Errors
///
/// Returns [`DataError`] if the file is unreadable, the header is missing a
/// required column, or a row carries a blank identifier.
pub fn load_instruments(path: impl AsRef<Path>) -> DataResult<Vec<InstrumentInfo>> {
    const TABLE: &str = "instruments";
    let path = path.as_ref();
    let mut reader = open_reader(TABLE, path)?;
    require_columns(
        TABLE,
        &mut reader,
        &["instrument_id", "equity_code", "display_name"],
    )?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let record = i + 1;
        let row: InstrumentRow = result.map_err(|e| DataError::parse(TABLE, e.to_string()))?;
        require_id(TABLE, "instrument_id", &row.instrument_id, record)?;
        require_id(TABLE, "equity_code", &row.equity_code, record)?;
        rows.push(InstrumentInfo {
            instrument_id: InstrumentId::new(row.instrument_id),
            equity_code: EquityCode::new(row.equity_code),
            display_name: row.display_name,
        });
    }

    tracing::debug!(table = TABLE, rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Loads the convertible bond daily series.
///
/// # Errors
///
/// Returns [`DataError`] if the file is unreadable, the header is missing a
/// required column, or a date/price field fails to parse.
pub fn load_bond_series(path: impl AsRef<Path>) -> DataResult<Vec<BondRecord>> {
    const TABLE: &str = "bond_daily";
    let path = path.as_ref();
    let mut reader = open_reader(TABLE, path)?;
    require_columns(
        TABLE,
        &mut reader,
        &["day", "instrument_id", "open", "high", "low", "close", "volume"],
    )?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let record = i + 1;
        let row: BondRow = result.map_err(|e| DataError::parse(TABLE, e.to_string()))?;
        require_id(TABLE, "instrument_id", &row.instrument_id, record)?;
        rows.push(BondRecord {
            day: row.day,
            instrument_id: InstrumentId::new(row.instrument_id),
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }

    tracing::debug!(table = TABLE, rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Loads the underlying equity daily series.
///
/// # Errors
///
/// Returns [`DataError`] if the file is unreadable, the header is missing a
/// required column, or a date/price field fails to parse.
pub fn load_equity_series(path: impl AsRef<Path>) -> DataResult<Vec<EquityRecord>> {
    const TABLE: &str = "equity_daily";
    let path = path.as_ref();
    let mut reader = open_reader(TABLE, path)?;
    require_columns(
        TABLE,
        &mut reader,
        &["day", "equity_code", "name", "open", "high", "low", "close", "volume"],
    )?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let record = i + 1;
        let row: EquityRow = result.map_err(|e| DataError::parse(TABLE, e.to_string()))?;
        require_id(TABLE, "equity_code", &row.equity_code, record)?;
        rows.push(EquityRecord {
            day: row.day,
            equity_code: EquityCode::new(row.equity_code),
            name: row.name,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }

    tracing::debug!(table = TABLE, rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Loads the conversion price change history.
///
/// Prices are loaded as-is; validity (positive, finite) is enforced by the
/// analytics layer, which knows how to isolate a bad instrument instead of
/// failing the load.
///
/// # Errors
///
/// Returns [`DataError`] if the file is unreadable, the header is missing a
/// required column, or a date/price field fails to parse.
pub fn load_conversion_events(path: impl AsRef<Path>) -> DataResult<Vec<ConversionPriceEvent>> {
    const TABLE: &str = "conversion_prices";
    let path = path.as_ref();
    let mut reader = open_reader(TABLE, path)?;
    require_columns(
        TABLE,
        &mut reader,
        &["instrument_id", "effective_date", "price"],
    )?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let record = i + 1;
        let row: ConversionPriceRow = result.map_err(|e| DataError::parse(TABLE, e.to_string()))?;
        require_id(TABLE, "instrument_id", &row.instrument_id, record)?;
        rows.push(ConversionPriceEvent {
            instrument_id: InstrumentId::new(row.instrument_id),
            effective_date: row.effective_date,
            price: row.price,
        });
    }

    tracing::debug!(table = TABLE, rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Loads all four tables from a data directory into a [`MarketDataSet`].
///
/// # Errors
///
/// Returns the first [`DataError`] encountered; nothing partial is returned.
pub fn load_market_data(dir: impl AsRef<Path>) -> DataResult<MarketDataSet> {
    let dir = dir.as_ref();
    let dataset = MarketDataSet {
        instruments: load_instruments(dir.join("instruments.csv"))?,
        bonds: load_bond_series(dir.join("bond_daily.csv"))?,
        equities: load_equity_series(dir.join("equity_daily.csv"))?,
        conversion_events: load_conversion_events(dir.join("conversion_prices.csv"))?,
    };
    tracing::info!(
        instruments = dataset.instruments.len(),
        bond_rows = dataset.bonds.len(),
        equity_rows = dataset.equities.len(),
        conversion_events = dataset.conversion_events.len(),
        "market data loaded"
    );
    Ok(dataset)
}
