//! Benchmark error types

use fts_spi::FtsError;
use thiserror::Error;

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchmarkError>;

/// Errors that abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// Configuration rejected before the run
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Error from the fuzzy time series layer outside a task
    #[error(transparent)]
    Fts(#[from] FtsError),

    /// I/O error while persisting results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while persisting results
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A key collected a different number of results than windows it ran in
    #[error("Inconsistent history for '{key}': expected {expected} windows, got {actual}")]
    InconsistentHistory {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl BenchmarkError {
    /// Shorthand for [`BenchmarkError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        BenchmarkError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = BenchmarkError::invalid("window_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'window_size': must be positive"
        );
    }

    #[test]
    fn test_fts_error_is_transparent() {
        let err: BenchmarkError = FtsError::EmptyPartition.into();
        assert!(matches!(err, BenchmarkError::Fts(FtsError::EmptyPartition)));
        assert_eq!(err.to_string(), FtsError::EmptyPartition.to_string());
    }

    #[test]
    fn test_inconsistent_history_message() {
        let err = BenchmarkError::InconsistentHistory {
            key: "CFTS n = 1 Grid q = 10".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Inconsistent history for 'CFTS n = 1 Grid q = 10': expected 3 windows, got 2"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BenchmarkError = io.into();
        assert!(matches!(err, BenchmarkError::Io(_)));
    }
}
