//! Unified error types for regionfn.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use regionfn_core::StoreWriteError;
use thiserror::Error;

/// All regionfn errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Region or function not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Function arguments malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A region rejected a write
    #[error("store write failed: {0}")]
    StoreWrite(#[from] StoreWriteError),

    /// Registration clashed with an existing entry
    #[error("conflict: {0}")]
    Conflict(String),

    /// The grid has been closed
    #[error("grid is closed")]
    Closed,

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for regionfn operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if re-invoking may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::StoreWrite(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an argument validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if a region rejected a write.
    pub fn is_store_write(&self) -> bool {
        matches!(self, Error::StoreWrite(_))
    }
}

// Convert from internal core errors
impl From<regionfn_core::Error> for Error {
    fn from(e: regionfn_core::Error) -> Self {
        use regionfn_core::Error as CoreError;
        match e {
            CoreError::InvalidArgument { reason } => Error::InvalidArgument(reason),
            CoreError::StoreWrite(inner) => Error::StoreWrite(inner),
            CoreError::FunctionNotFound { id } => Error::NotFound(format!("function {}", id)),
            CoreError::RegionNotFound { name } => Error::NotFound(format!("region {}", name)),
            CoreError::DuplicateFunction { id } => {
                Error::Conflict(format!("function {} already registered", id))
            }
            CoreError::Closed => Error::Closed,
            CoreError::Serialization(msg) => Error::Serialization(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
