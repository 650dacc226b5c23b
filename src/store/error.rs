//! Record store error types
//!
//! Defines all errors that can occur in the store layer.

use thiserror::Error;

/// Errors that can occur in the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given id exists
    #[error("Brief not found: {id}")]
    NotFound { id: u64 },

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage medium rejected a read or write
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization/deserialization of the persisted collection failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "Brief not found: 7");

        let err = StoreError::Backend("slot unavailable".to_string());
        assert_eq!(err.to_string(), "Backend error: slot unavailable");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let store_err: StoreError = parse_err.into();
        assert!(matches!(store_err, StoreError::Serialization(_)));
    }
}
