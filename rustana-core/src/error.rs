//! Error types for rustana-core.

use thiserror::Error;

/// Result type alias for rustana operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for rustana operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A weight id was added more than once; the first value is kept.
    #[error("weight {id} is already defined, redundant value skipped")]
    DuplicateWeight { id: u32 },

    /// Lookup of a weight id that was never added.
    #[error("no weight stored under id {id}")]
    WeightNotFound { id: u32 },
}

impl Error {
    /// Returns true for recoverable conditions the caller may log and ignore.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DuplicateWeight { .. })
    }
}
