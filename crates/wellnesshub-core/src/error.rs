//! Core error types for wellnesshub-core.
//!
//! This module defines the error hierarchy using thiserror. Library code
//! propagates errors with `?`; nothing here is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wellnesshub-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Access/capability errors
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for user-submitted data.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("Required field is missing: {0}")]
    MissingField(&'static str),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Wrong number of quiz answers
    #[error("Expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    /// Quiz answer index out of range
    #[error("Answer {index} out of range for question {question}")]
    OptionOutOfRange { question: usize, index: usize },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
}

/// Errors from the admin gate and capability checks.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The admin gate password comparison failed
    #[error("Authentication failed: the password you entered is incorrect")]
    WrongPassword,

    /// The operation requires a signed-in local user
    #[error("Sign in required")]
    NotSignedIn,

    /// The caller lacks the capability for this operation
    #[error("Not permitted: {0}")]
    NotPermitted(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
