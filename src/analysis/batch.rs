//! Batch prediction over an uploaded table.

use std::sync::Arc;

use itertools::Itertools;
use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::data::DataTable;
use crate::domain::{DAILY_RETURN_COLUMN, PredictionError, PredictionTarget, SEVEN_DAY_MA_COLUMN};
use crate::models::ModelStore;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How often a label occurs in one prediction column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Everything the historical tab renders after a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    /// The upload with `Risk Prediction` and `Reward Prediction` set
    pub table: DataTable,
    pub risk_labels: Vec<String>,
    pub reward_labels: Vec<String>,
    pub daily_returns: Vec<f64>,
    pub moving_averages: Vec<f64>,
    pub risk_counts: Vec<LabelCount>,
    pub reward_counts: Vec<LabelCount>,
    pub mean_daily_return: f64,
}

impl BatchAnalysis {
    pub fn labels(&self, target: PredictionTarget) -> &[String] {
        match target {
            PredictionTarget::Risk => &self.risk_labels,
            PredictionTarget::Reward => &self.reward_labels,
        }
    }

    pub fn counts(&self, target: PredictionTarget) -> &[LabelCount] {
        match target {
            PredictionTarget::Risk => &self.risk_counts,
            PredictionTarget::Reward => &self.reward_counts,
        }
    }

    /// Series for the line chart: (column name, values by row index).
    pub fn feature_series(&self) -> [(&'static str, &[f64]); 2] {
        [
            (DAILY_RETURN_COLUMN, self.daily_returns.as_slice()),
            (SEVEN_DAY_MA_COLUMN, self.moving_averages.as_slice()),
        ]
    }

    /// The "Average Daily Return" metric, e.g. "0.67%".
    pub fn mean_daily_return_display(&self) -> String {
        format_percent(self.mean_daily_return)
    }
}

pub struct BatchPredictor {
    store: Arc<ModelStore>,
}

impl BatchPredictor {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    /// Runs both models over every row of `upload`.
    /// The upload itself is left untouched so the caller can keep showing it on failure.
    pub fn analyse(&self, upload: &DataTable) -> Result<BatchAnalysis, PredictionError> {
        if upload.is_empty() {
            return Err(PredictionError::EmptyUpload);
        }

        let features = upload.feature_table()?;
        let risk_labels = self.store.predict(PredictionTarget::Risk, &features)?;
        let reward_labels = self.store.predict(PredictionTarget::Reward, &features)?;

        let mut table = upload.clone();
        table.set_column(PredictionTarget::Risk.column_name(), risk_labels.clone());
        table.set_column(PredictionTarget::Reward.column_name(), reward_labels.clone());

        let daily_returns: Vec<f64> = features.rows().iter().map(|r| r.daily_return).collect();
        let moving_averages: Vec<f64> = features.rows().iter().map(|r| r.seven_day_ma).collect();
        let mean_daily_return = daily_returns.iter().mean();

        let analysis = BatchAnalysis {
            table,
            risk_counts: value_counts(&risk_labels),
            reward_counts: value_counts(&reward_labels),
            risk_labels,
            reward_labels,
            daily_returns,
            moving_averages,
            mean_daily_return,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_uploads {
            log::info!(
                "Batch analysis: {} rows, risk {:?}, reward {:?}",
                analysis.table.row_count(),
                analysis.risk_counts,
                analysis.reward_counts
            );
        }

        Ok(analysis)
    }
}

/// Label frequencies, most frequent first. Ties keep the order in which the
/// labels first appear.
pub fn value_counts(labels: &[String]) -> Vec<LabelCount> {
    labels
        .iter()
        .unique()
        .map(|label| LabelCount {
            label: label.clone(),
            count: labels.iter().filter(|l| *l == label).count(),
        })
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect()
}

/// Two decimals and a trailing percent sign.
pub fn format_percent(value: f64) -> String {
    format!("{:.*}%", ANALYSIS.display_decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::single_sample::SingleSamplePredictor;
    use crate::models::classifier::stubs::{FailingClassifier, reward_model, risk_model};

    const HISTORY_CSV: &str = "Daily Return,7-Day MA\n1.0,1.0\n2.0,1.5\n-1.0,0.5\n";

    fn store() -> Arc<ModelStore> {
        Arc::new(ModelStore::new(
            Box::new(risk_model()),
            Box::new(reward_model()),
        ))
    }

    fn upload(csv: &str) -> DataTable {
        DataTable::from_csv_bytes(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_mean_daily_return_metric() {
        let analysis = BatchPredictor::new(store()).analyse(&upload(HISTORY_CSV)).unwrap();

        assert!((analysis.mean_daily_return - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(analysis.mean_daily_return_display(), "0.67%");
    }

    #[test]
    fn test_augmented_table_shape() {
        let input = upload("Date,Daily Return,7-Day MA\nd1,1.0,1.0\nd2,2.0,1.5\nd3,-1.0,0.5\n");
        let analysis = BatchPredictor::new(store()).analyse(&input).unwrap();

        assert_eq!(analysis.table.row_count(), input.row_count());
        assert_eq!(analysis.table.column_count(), input.column_count() + 2);
        assert_eq!(
            &analysis.table.headers()[3..],
            &["Risk Prediction", "Reward Prediction"]
        );
        assert_eq!(
            analysis.table.rows()[1],
            vec!["d2", "2.0", "1.5", "High Risk", "High Reward"]
        );
    }

    #[test]
    fn test_batch_labels_match_single_sample_labels() {
        let store = store();
        let input = upload(HISTORY_CSV);
        let analysis = BatchPredictor::new(Arc::clone(&store)).analyse(&input).unwrap();
        let single = SingleSamplePredictor::new(store);

        for (idx, row) in input.feature_table().unwrap().rows().iter().enumerate() {
            let prediction = single.predict(*row).unwrap();
            assert_eq!(analysis.risk_labels[idx], prediction.risk.label);
            assert_eq!(analysis.reward_labels[idx], prediction.reward.label);
        }
    }

    #[test]
    fn test_missing_column_leaves_upload_intact() {
        let input = upload("Daily Return,Close\n1.0,10\n");
        let before = input.clone();

        let result = BatchPredictor::new(store()).analyse(&input);

        assert_eq!(
            result,
            Err(PredictionError::MissingColumns(vec!["7-Day MA".to_string()]))
        );
        assert_eq!(input, before);
        assert_eq!(input.head(ANALYSIS.preview_rows).row_count(), 1);
    }

    #[test]
    fn test_non_finite_cells_fail_instead_of_averaging() {
        let result = BatchPredictor::new(store()).analyse(&upload(
            "Daily Return,7-Day MA\n1.0,1.0\ninf,0.5\n",
        ));
        assert!(matches!(
            result,
            Err(PredictionError::InvalidFeatureValue { row: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_upload_is_empty() {
        let result = BatchPredictor::new(store()).analyse(&upload("Daily Return,7-Day MA\n"));
        assert_eq!(result, Err(PredictionError::EmptyUpload));
    }

    #[test]
    fn test_model_failure_is_caught() {
        let store = Arc::new(ModelStore::new(
            Box::new(FailingClassifier),
            Box::new(reward_model()),
        ));
        let result = BatchPredictor::new(store).analyse(&upload(HISTORY_CSV));
        assert!(matches!(result, Err(PredictionError::ModelInvocationFailed { .. })));
    }

    #[test]
    fn test_value_counts_order() {
        let labels: Vec<String> = [
            "Low Risk",
            "High Risk",
            "High Risk",
            "Medium Risk",
            "Low Risk",
            "High Risk",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let counts = value_counts(&labels);
        let pairs: Vec<(&str, usize)> =
            counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("High Risk", 3), ("Low Risk", 2), ("Medium Risk", 1)]);
    }

    #[test]
    fn test_value_counts_ties_keep_first_appearance() {
        let labels: Vec<String> = ["Medium Reward", "Low Reward", "Low Reward", "Medium Reward"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let counts = value_counts(&labels);
        assert_eq!(counts[0].label, "Medium Reward");
        assert_eq!(counts[1].label, "Low Reward");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(-1.005), "-1.00%");
        assert_eq!(format_percent(12.3456), "12.35%");
    }
}
