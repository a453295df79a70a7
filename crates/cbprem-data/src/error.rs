//! Error types for table loading.

use thiserror::Error;

/// A specialized Result type for data loading operations.
pub type DataResult<T> = Result<T, DataError>;

/// The error type for table loading and validation.
#[derive(Error, Debug, Clone)]
pub enum DataError {
    /// File could not be opened or read.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },

    /// A row failed to parse (bad number, bad date, blank identifier).
    #[error("Parse error in {table}: {message}")]
    Parse {
        /// Logical table name.
        table: String,
        /// Description of the parse failure, including position.
        message: String,
    },

    /// The file's header row does not match the expected schema.
    #[error("Schema error in {table}: {reason}")]
    Schema {
        /// Logical table name.
        table: String,
        /// Description of the schema mismatch.
        reason: String,
    },
}

impl DataError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Creates a schema error.
    #[must_use]
    pub fn schema(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            table: table.into(),
            reason: reason.into(),
        }
    }
}
