use std::sync::Arc;

use crate::domain::{
    CategoryPrediction, FeatureRow, FeatureTable, PredictionError, PredictionTarget,
};
use crate::models::ModelStore;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Both labels for one manually entered observation.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePrediction {
    pub features: FeatureRow,
    pub risk: CategoryPrediction,
    pub reward: CategoryPrediction,
}

impl SinglePrediction {
    /// Bar heights in chart order: [risk, reward].
    pub fn levels(&self) -> [f64; 2] {
        [self.risk.height(), self.reward.height()]
    }

    pub fn get(&self, target: PredictionTarget) -> &CategoryPrediction {
        match target {
            PredictionTarget::Risk => &self.risk,
            PredictionTarget::Reward => &self.reward,
        }
    }
}

pub struct SingleSamplePredictor {
    store: Arc<ModelStore>,
}

impl SingleSamplePredictor {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    /// Wraps the inputs as a one-row table and asks both models for a label.
    pub fn predict(&self, features: FeatureRow) -> Result<SinglePrediction, PredictionError> {
        let table = FeatureTable::single(features);

        let risk = self.predict_one(PredictionTarget::Risk, &table)?;
        let reward = self.predict_one(PredictionTarget::Reward, &table)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_predictions {
            log::info!(
                "Predicted ({:.2}, {:.2}) -> {:?} / {:?}",
                features.daily_return,
                features.seven_day_ma,
                risk.label,
                reward.label
            );
        }

        Ok(SinglePrediction {
            features,
            risk,
            reward,
        })
    }

    fn predict_one(
        &self,
        target: PredictionTarget,
        table: &FeatureTable,
    ) -> Result<CategoryPrediction, PredictionError> {
        let labels = self.store.predict(target, table)?;
        // The store guarantees one label per row and the table has exactly one row
        let label = labels.into_iter().next().ok_or_else(|| {
            PredictionError::PredictionCountMismatch {
                model: self.store.classifier(target).name().to_string(),
                expected: 1,
                actual: 0,
            }
        })?;
        Ok(CategoryPrediction::new(target, label))
    }
}
