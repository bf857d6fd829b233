use crate::domain::{FeatureTable, PredictionError};

/// Interface for the pre-trained classifiers
pub trait Classifier: Send + Sync {
    /// One label per row of `table`, in row order.
    fn predict(&self, table: &FeatureTable) -> Result<Vec<String>, PredictionError>;

    /// Get model name (used in logs and error messages)
    fn name(&self) -> &str;
}

#[cfg(test)]
pub(crate) mod stubs {
    use super::*;
    use crate::domain::FeatureRow;

    /// Labels each row with a plain function of its features.
    pub struct RuleClassifier {
        pub name: &'static str,
        pub rule: fn(&FeatureRow) -> String,
    }

    impl Classifier for RuleClassifier {
        fn predict(&self, table: &FeatureTable) -> Result<Vec<String>, PredictionError> {
            Ok(table.rows().iter().map(self.rule).collect())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    /// Always raises, like a model fed inputs it cannot handle.
    pub struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _table: &FeatureTable) -> Result<Vec<String>, PredictionError> {
            Err(PredictionError::model_failure("Broken model", "estimator is not fitted"))
        }

        fn name(&self) -> &str {
            "Broken model"
        }
    }

    /// Drops the last label.
    pub struct ShortClassifier;

    impl Classifier for ShortClassifier {
        fn predict(&self, table: &FeatureTable) -> Result<Vec<String>, PredictionError> {
            Ok(vec!["Low Risk".to_string(); table.len().saturating_sub(1)])
        }

        fn name(&self) -> &str {
            "Short model"
        }
    }

    pub fn risk_by_daily_return(row: &FeatureRow) -> String {
        if row.daily_return > 1.5 {
            "High Risk".to_string()
        } else if row.daily_return > 0.0 {
            "Medium Risk".to_string()
        } else {
            "Low Risk".to_string()
        }
    }

    pub fn reward_by_moving_average(row: &FeatureRow) -> String {
        if row.seven_day_ma >= 0.75 {
            "High Reward".to_string()
        } else if row.seven_day_ma > 0.0 {
            "Medium Reward".to_string()
        } else {
            "Low Reward".to_string()
        }
    }

    pub fn risk_model() -> RuleClassifier {
        RuleClassifier {
            name: "Risk model",
            rule: risk_by_daily_return,
        }
    }

    pub fn reward_model() -> RuleClassifier {
        RuleClassifier {
            name: "Reward model",
            rule: reward_by_moving_average,
        }
    }
}
