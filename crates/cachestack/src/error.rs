//! Cache-related error types

use thiserror::Error;

/// Errors raised by the instance registry and cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// A concrete key was mandatory and the given one is not a valid key
    #[error("Invalid cache key: {key:?}")]
    InvalidKey { key: String },

    /// No instance is registered under the referenced key
    #[error("No cache instance registered under key: {key}")]
    NotRegistered { key: String },

    /// Default resolution was requested on a registry with no entries
    #[error("No cache instances registered")]
    EmptyRegistry,

    /// Failure reported by a concrete cache backend
    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Re-export commonly used Result type
pub type Result<T> = std::result::Result<T, CacheError>;
