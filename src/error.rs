//! Error handling.

use std::error::Error as StdError;

use anyhow::Error as AnyError;
use displaydoc::Display;

pub type StoreResult<T> = Result<T, StoreError>;

/// An error.
#[derive(Debug, Display)]
pub enum StoreError {
    /// Database error: {0}
    DatabaseError(AnyError),

    /// Unsupported database URL {url:?}: must be postgres:// or sqlite:
    UnsupportedDatabaseUrl { url: String },
}

impl StoreError {
    pub fn database_error(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::DatabaseError(AnyError::new(error))
    }
}

impl StdError for StoreError {}
