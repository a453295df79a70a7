//! CLI command implementations.

pub mod enrich;
pub mod premium;
pub mod snapshot;
pub mod summary;

// Re-export argument structs for convenience
pub use enrich::EnrichArgs;
pub use premium::PremiumArgs;
pub use snapshot::SnapshotArgs;
pub use summary::SummaryArgs;

use cbprem_core::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|e| CliError::InvalidArgument(e.to_string()))
}
