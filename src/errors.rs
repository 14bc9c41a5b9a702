//! Unified error types for `BirthdayBuddy`.
//!
//! Data-only problems (missing storage, undecodable blobs, unknown ids on
//! delete) are recovered close to where they occur and never surface as
//! hard failures from store operations. The variants here cover the
//! remaining cases: configuration problems, creation-boundary contract
//! violations, and lookups that callers asked to be told about.

use thiserror::Error;
use uuid::Uuid;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// A record failed creation-boundary validation (e.g. empty name)
    #[error("Invalid birthday record: {message}")]
    InvalidRecord {
        /// Description of the violated constraint
        message: String,
    },

    /// No record with the given id exists in the store
    #[error("No birthday record with id {id}")]
    RecordNotFound {
        /// The id that was looked up
        id: Uuid,
    },

    /// Underlying filesystem failure from the blob store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
