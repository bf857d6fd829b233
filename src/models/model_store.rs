use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::{FeatureTable, PredictionError, PredictionTarget};
use crate::models::artifact::ModelArtifact;
use crate::models::classifier::Classifier;

/// The two pre-trained classifiers. Built once at start-up, shared by
/// reference (behind an `Arc`) with both predictors, never mutated.
pub struct ModelStore {
    risk: Box<dyn Classifier>,
    reward: Box<dyn Classifier>,
}

impl ModelStore {
    pub fn new(risk: Box<dyn Classifier>, reward: Box<dyn Classifier>) -> Self {
        Self { risk, reward }
    }

    pub fn load(risk_path: &Path, reward_path: &Path) -> Result<Self> {
        let risk = ModelArtifact::load_from_path(risk_path).context("Failed to load risk model")?;
        log::info!(
            "Loaded risk model '{}' ({}) from {:?}",
            risk.name,
            risk.estimator.kind(),
            risk_path
        );

        let reward =
            ModelArtifact::load_from_path(reward_path).context("Failed to load reward model")?;
        log::info!(
            "Loaded reward model '{}' ({}) from {:?}",
            reward.name,
            reward.estimator.kind(),
            reward_path
        );

        Ok(Self::new(Box::new(risk), Box::new(reward)))
    }

    pub fn classifier(&self, target: PredictionTarget) -> &dyn Classifier {
        match target {
            PredictionTarget::Risk => self.risk.as_ref(),
            PredictionTarget::Reward => self.reward.as_ref(),
        }
    }

    /// Runs one model over `table`, guaranteeing exactly one label per row.
    pub fn predict(
        &self,
        target: PredictionTarget,
        table: &FeatureTable,
    ) -> Result<Vec<String>, PredictionError> {
        let classifier = self.classifier(target);
        let labels = classifier.predict(table)?;
        if labels.len() != table.len() {
            return Err(PredictionError::PredictionCountMismatch {
                model: classifier.name().to_string(),
                expected: table.len(),
                actual: labels.len(),
            });
        }
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeatureRow;
    use crate::models::classifier::stubs::{ShortClassifier, reward_model, risk_model};

    #[test]
    fn test_routes_each_target_to_its_model() {
        let store = ModelStore::new(Box::new(risk_model()), Box::new(reward_model()));
        let table = FeatureTable::single(FeatureRow::new(2.0, 0.5));

        assert_eq!(store.predict(PredictionTarget::Risk, &table).unwrap(), vec!["High Risk"]);
        assert_eq!(
            store.predict(PredictionTarget::Reward, &table).unwrap(),
            vec!["Medium Reward"]
        );
        assert_eq!(store.classifier(PredictionTarget::Reward).name(), "Reward model");
    }

    #[test]
    fn test_label_count_must_match_row_count() {
        let store = ModelStore::new(Box::new(ShortClassifier), Box::new(reward_model()));
        let table = FeatureTable::new(vec![FeatureRow::new(1.0, 1.0), FeatureRow::new(2.0, 2.0)]);

        assert_eq!(
            store.predict(PredictionTarget::Risk, &table),
            Err(PredictionError::PredictionCountMismatch {
                model: "Short model".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }
}
