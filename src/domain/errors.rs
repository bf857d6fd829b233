//! Failure kinds surfaced by the predictors.
//!
//! Every variant is caught at the predictor boundary and shown inline in the
//! tab that triggered it. None of them ends the session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The upload could not be read as a CSV table.
    #[error("Could not read the uploaded file: {0}")]
    MalformedUpload(String),

    /// The upload has a header but no data rows.
    #[error("The uploaded file contains no data rows")]
    EmptyUpload,

    /// One or more required feature columns are absent.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A feature cell could not be parsed as a number.
    #[error("Column '{column}' row {row} is not a number: '{value}'")]
    InvalidFeatureValue {
        column: String,
        /// 1-based data row (header excluded)
        row: usize,
        value: String,
    },

    /// The estimator rejected the input or produced an unusable result.
    #[error("{model} failed to predict: {reason}")]
    ModelInvocationFailed { model: String, reason: String },

    /// The estimator returned a different number of labels than rows given.
    #[error("{model} returned {actual} prediction(s) for {expected} row(s)")]
    PredictionCountMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },
}

impl PredictionError {
    /// Short category name used as the heading of the inline error box.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::MalformedUpload(_) => "Malformed upload",
            PredictionError::EmptyUpload => "Empty upload",
            PredictionError::MissingColumns(_) => "Missing columns",
            PredictionError::InvalidFeatureValue { .. } => "Invalid feature value",
            PredictionError::ModelInvocationFailed { .. } => "Model invocation failed",
            PredictionError::PredictionCountMismatch { .. } => "Prediction count mismatch",
        }
    }

    pub(crate) fn model_failure(model: &str, reason: impl Into<String>) -> Self {
        PredictionError::ModelInvocationFailed {
            model: model.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct_per_kind() {
        let missing =
            PredictionError::MissingColumns(vec!["Daily Return".into(), "7-Day MA".into()]);
        assert_eq!(
            missing.to_string(),
            "Missing required column(s): Daily Return, 7-Day MA"
        );

        let invalid = PredictionError::InvalidFeatureValue {
            column: "7-Day MA".into(),
            row: 3,
            value: "abc".into(),
        };
        assert_eq!(invalid.to_string(), "Column '7-Day MA' row 3 is not a number: 'abc'");

        let mismatch = PredictionError::PredictionCountMismatch {
            model: "Risk model".into(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            mismatch.to_string(),
            "Risk model returned 2 prediction(s) for 3 row(s)"
        );
        assert_ne!(missing.kind(), invalid.kind());
    }
}
