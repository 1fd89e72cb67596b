//! Error types for the Diet Planner engine

use thiserror::Error;

/// Errors surfaced by the risk/scoring pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("Malformed profile field '{field}': {message}")]
    MalformedProfile { field: String, message: String },

    #[error("Insufficient training data: need at least {required} examples, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Risk predictor has not been trained")]
    NotTrained,

    #[error("Regression failure: {0}")]
    Regression(String),
}

impl AssessmentError {
    /// Convenience constructor for profile validation failures
    pub fn malformed(field: &str, message: impl Into<String>) -> Self {
        Self::MalformedProfile {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type AssessmentResult<T> = Result<T, AssessmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_profile_message() {
        let err = AssessmentError::malformed("height_cm", "must be positive");
        assert_eq!(
            err.to_string(),
            "Malformed profile field 'height_cm': must be positive"
        );
    }

    #[test]
    fn test_insufficient_data_message() {
        let err = AssessmentError::InsufficientData { required: 2, got: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient training data: need at least 2 examples, got 1"
        );
    }
}
