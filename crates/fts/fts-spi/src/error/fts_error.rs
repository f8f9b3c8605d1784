//! Fuzzy time series error types

use thiserror::Error;

/// Result type alias for fuzzy time series operations
pub type Result<T> = std::result::Result<T, FtsError>;

/// Errors that can occur while partitioning, training or forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Training was attempted with no fuzzy sets
    #[error("Partition has no fuzzy sets")]
    EmptyPartition,

    /// Model has not been trained yet
    #[error("Model must be trained before forecasting")]
    NotTrained,

    /// Model does not implement the requested forecasting type
    #[error("Model '{model}' does not support {kind} forecasting")]
    UnsupportedForecast { model: String, kind: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl FtsError {
    /// Shorthand for [`FtsError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        FtsError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let error = FtsError::InsufficientData {
            required: 3,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 3 points, got 1"
        );
    }

    #[test]
    fn test_invalid_parameter_shorthand() {
        let error = FtsError::invalid("partitions", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'partitions': must be positive"
        );
    }

    #[test]
    fn test_unsupported_forecast_message() {
        let error = FtsError::UnsupportedForecast {
            model: "CFTS".to_string(),
            kind: "interval".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Model 'CFTS' does not support interval forecasting"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = FtsError::EmptyPartition;
        assert_eq!(error.clone(), FtsError::EmptyPartition);
        assert_ne!(error, FtsError::NotTrained);
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_std_error::<FtsError>();
    }
}
