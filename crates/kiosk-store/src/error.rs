//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error
//!      │
//!      ▼
//! StoreError (this module) ← adds the file path
//!      │
//!      ▼
//! AppError (kiosk-cli) ← printed to the operator
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Order log errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file (or its directory) could not be created or opened.
    #[error("Cannot open order log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a record failed.
    #[error("Cannot write to order log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("Cannot serialize order: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Open {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for order log operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages_include_path() {
        let err = StoreError::write(
            "/tmp/orders.json",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(
            err.to_string(),
            "Cannot write to order log /tmp/orders.json: disk full"
        );
    }
}
