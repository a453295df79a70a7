//! CLI error type.

use thiserror::Error;

/// A specialized Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced directly to the command-line user.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Table loading failed.
    #[error(transparent)]
    Data(#[from] cbprem_data::DataError),

    /// Pipeline computation failed.
    #[error(transparent)]
    Analytics(#[from] cbprem_analytics::AnalyticsError),
}
