//! Error types for class generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A required option was not supplied by any configuration source
    #[error("missing required option: {0}")]
    MissingRequiredOption(String),

    /// Database type name has no entry in the type table
    #[error("unmapped database type '{type_name}' for column '{column}'")]
    UnmappedType { type_name: String, column: String },

    /// Connection or query failure
    #[error("database error: {0}")]
    Database(String),

    /// The schema query returned no columns for the table
    #[error("table not found or has no columns: {0}")]
    TableNotFound(String),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// The table name exists in more than one schema and none was chosen
    #[error("table '{table}' exists in schemas {}; pass --schema to pick one", .schemas.join(", "))]
    AmbiguousTable { table: String, schemas: Vec<String> },
}

impl GenError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::MissingRequiredOption(_) => 2,
            GenError::UnmappedType { .. } => 3,
            GenError::Database(_) => 4,
            GenError::TableNotFound(_) => 5,
            GenError::Config(_) => 6,
            GenError::AmbiguousTable { .. } => 7,
        }
    }

    /// Create an unmapped type error for a column
    pub fn unmapped(type_name: impl Into<String>, column: impl Into<String>) -> Self {
        GenError::UnmappedType {
            type_name: type_name.into(),
            column: column.into(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
