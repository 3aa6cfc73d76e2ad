//! Error types for the persistence layer.
//!
//! Failures are split into backend errors (anything the storage engine or its
//! client reported) and search errors (stored data that could not be reshaped
//! into runs). Neither category is retried or recovered locally.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Errors while reshaping search results
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors raised while turning search hits into benchmark runs.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A stored `datetime` did not match the run timestamp format.
    #[error("invalid timestamp '{value}' for run {key}: {message}")]
    InvalidTimestamp {
        key: String,
        value: String,
        message: String,
    },

    /// A hit is missing fields required to rebuild a benchmark.
    #[error("malformed search hit {id}: {message}")]
    MalformedHit { id: String, message: String },
}

/// Errors originating from the storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "elasticsearch")]
impl From<elasticsearch::Error> for StorageError {
    fn from(err: elasticsearch::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "elasticsearch".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}
