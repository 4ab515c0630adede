//! Error types shared by every regionfn crate.
//!
//! [`StoreWriteError`] is what a region reports when it rejects a write.
//! [`Error`] is what a function invocation reports to its caller.

use thiserror::Error;

/// A region refused to store a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreWriteError {
    /// The region is full and the key is not already present
    #[error("region '{region}' is at capacity ({limit} entries), cannot insert '{key}'")]
    CapacityExceeded {
        /// Region name
        region: String,
        /// Key that could not be inserted
        key: String,
        /// Configured entry limit
        limit: usize,
    },

    /// The region has been closed
    #[error("region '{region}' is closed")]
    RegionClosed {
        /// Region name
        region: String,
    },

    /// The backing store rejected the write for another reason
    #[error("region '{region}' rejected write of '{key}': {reason}")]
    Rejected {
        /// Region name
        region: String,
        /// Key being written
        key: String,
        /// Store-specific reason
        reason: String,
    },
}

impl StoreWriteError {
    /// Region that rejected the write
    pub fn region(&self) -> &str {
        match self {
            StoreWriteError::CapacityExceeded { region, .. }
            | StoreWriteError::RegionClosed { region }
            | StoreWriteError::Rejected { region, .. } => region,
        }
    }

    /// A rejection may succeed when re-invoked; capacity and closed regions won't.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreWriteError::Rejected { .. })
    }
}

/// Function invocation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument list malformed (wrong arity, wrong type)
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the arguments
        reason: String,
    },

    /// The region rejected a write part-way through an invocation
    #[error("store write failed: {0}")]
    StoreWrite(#[from] StoreWriteError),

    /// No function registered under this id
    #[error("function not found: {id}")]
    FunctionNotFound {
        /// Requested function id
        id: String,
    },

    /// A function with this id is already registered
    #[error("function already registered: {id}")]
    DuplicateFunction {
        /// Conflicting function id
        id: String,
    },

    /// No region with this name
    #[error("region not found: {name}")]
    RegionNotFound {
        /// Requested region name
        name: String,
    },

    /// The grid has been closed
    #[error("grid is closed")]
    Closed,

    /// Argument or result (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for regionfn operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this is an argument validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Check if a region rejected a write.
    pub fn is_store_write(&self) -> bool {
        matches!(self, Error::StoreWrite(_))
    }

    /// Check if re-invoking may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::StoreWrite(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
