//! Error types for AgriIndia Assistant.

use std::path::PathBuf;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Document store and session store errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Document in {collection} has no usable key field {field}")]
    MissingKey { collection: String, field: String },
}

/// Why a bundled dataset file produced no records.
///
/// Callers that only need records use `DatasetSource::load_or_empty`;
/// tests match on the variant to tell an absent file from a broken one.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("No dataset file found (checked {checked:?})")]
    NotFound { checked: Vec<PathBuf> },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Dataset {path} is not a JSON array")]
    NotAnArray { path: PathBuf },
}

/// Catalog lookup errors. Dataset problems never surface here; only the
/// document store can fail a catalog call.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Document store unavailable: {0}")]
    Store(#[from] DatabaseError),
}
