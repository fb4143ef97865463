//! Error types for the jinn library.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Comprehensive error type for all session and storage operations.
#[derive(Error, Debug)]
pub enum JinnError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Saved process not found for the given ID
    #[error("Saved process with ID {id} not found")]
    ProcessNotFound { id: String },
    /// The generation collaborator failed
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Failures reported by the generation collaborator.
///
/// These never reach the user verbatim: the session logs them and surfaces a
/// single localized message instead.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no generator is configured")]
    Unavailable,

    #[error("failed to start generator '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator timed out after {0:?}")]
    Timeout(Duration),

    #[error("generator exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("could not parse generator output: {0}")]
    Parse(String),

    #[error("generator returned nothing for {operation}")]
    EmptyResponse { operation: &'static str },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> JinnError {
        JinnError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> JinnError {
        JinnError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl JinnError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Error for a blocking task that could not be joined.
    pub(crate) fn join(error: &tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| JinnError::database(message).with_source(e))
    }
}

/// Result type alias for jinn operations
pub type Result<T> = std::result::Result<T, JinnError>;
