//! Prediction targets, their label vocabularies, and the label-to-level projection
//! used by the charts.

use strum_macros::{Display, EnumIter};

/// Which of the two classifiers a label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PredictionTarget {
    Risk,
    Reward,
}

impl PredictionTarget {
    /// Exact label a model returns for the given level (`None` for `Unrecognized`).
    pub fn label_for(self, level: CategoryLevel) -> Option<String> {
        match level {
            CategoryLevel::Unrecognized => None,
            known => Some(format!("{} {}", known, self)),
        }
    }

    /// Name of the column appended to an uploaded table.
    pub fn column_name(self) -> &'static str {
        match self {
            PredictionTarget::Risk => "Risk Prediction",
            PredictionTarget::Reward => "Reward Prediction",
        }
    }

    /// Projects a returned label onto a level. Only the exact label of this
    /// target is recognized ("High Risk" means nothing to the reward side).
    pub fn level_of(self, label: &str) -> CategoryLevel {
        [CategoryLevel::High, CategoryLevel::Medium, CategoryLevel::Low]
            .into_iter()
            .find(|level| self.label_for(*level).as_deref() == Some(label))
            .unwrap_or(CategoryLevel::Unrecognized)
    }
}

/// Coarse level of a label. `Unrecognized` charts at the same height as `Low`
/// but stays distinguishable so the UI can flag it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CategoryLevel {
    Low,
    Medium,
    High,
    Unrecognized,
}

impl CategoryLevel {
    /// Bar height: High 1.0, Medium 0.5, everything else 0.0.
    pub fn height(self) -> f64 {
        match self {
            CategoryLevel::High => 1.0,
            CategoryLevel::Medium => 0.5,
            CategoryLevel::Low | CategoryLevel::Unrecognized => 0.0,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != CategoryLevel::Unrecognized
    }
}

/// A label as returned by one model, together with its projected level.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPrediction {
    pub target: PredictionTarget,
    /// Passed through unchanged from the model
    pub label: String,
    pub level: CategoryLevel,
}

impl CategoryPrediction {
    pub fn new(target: PredictionTarget, label: impl Into<String>) -> Self {
        let label = label.into();
        let level = target.level_of(&label);
        Self {
            target,
            label,
            level,
        }
    }

    pub fn height(&self) -> f64 {
        self.level.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_risk_levels() {
        assert_eq!(PredictionTarget::Risk.level_of("High Risk").height(), 1.0);
        assert_eq!(PredictionTarget::Risk.level_of("Medium Risk").height(), 0.5);
        assert_eq!(PredictionTarget::Risk.level_of("Low Risk").height(), 0.0);
        assert_eq!(PredictionTarget::Risk.level_of("Low Risk"), CategoryLevel::Low);
    }

    #[test]
    fn test_reward_levels() {
        assert_eq!(PredictionTarget::Reward.level_of("High Reward").height(), 1.0);
        assert_eq!(PredictionTarget::Reward.level_of("Medium Reward").height(), 0.5);
        assert_eq!(PredictionTarget::Reward.level_of("Low Reward").height(), 0.0);
    }

    #[test]
    fn test_unrecognized_labels_chart_at_zero_but_are_flagged() {
        for label in ["high risk", "High Reward", "", "Extreme Risk"] {
            let level = PredictionTarget::Risk.level_of(label);
            assert_eq!(level, CategoryLevel::Unrecognized, "label {:?}", label);
            assert_eq!(level.height(), 0.0);
            assert!(!level.is_recognized());
        }
    }

    #[test]
    fn test_every_known_label_round_trips_through_level_of() {
        for target in PredictionTarget::iter() {
            for level in CategoryLevel::iter().filter(|l| l.is_recognized()) {
                let label = target.label_for(level).unwrap();
                assert_eq!(target.level_of(&label), level);
            }
        }
    }

    #[test]
    fn test_prediction_keeps_label_unchanged() {
        let prediction = CategoryPrediction::new(PredictionTarget::Reward, "Off The Charts");
        assert_eq!(prediction.label, "Off The Charts");
        assert_eq!(prediction.level, CategoryLevel::Unrecognized);
        assert_eq!(prediction.height(), 0.0);
    }
}
