//! Persisted classifier artifacts.
//!
//! An artifact bundles a fitted smartcore estimator with the feature column
//! order it was fitted on and the label string for every class index it can
//! return. `.json` files are read with serde_json, anything else with bincode.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::DecisionTreeClassifier;

use crate::config::models::JSON_ARTIFACT_EXTENSION;
use crate::domain::{FEATURE_COLUMNS, FeatureTable, PredictionError};
use crate::models::classifier::Classifier;

pub type FeatureMatrix = DenseMatrix<f64>;
pub type ClassIndices = Vec<i32>;

/// The fitted estimators an artifact may carry.
#[derive(Serialize, Deserialize)]
pub enum Estimator {
    DecisionTree(DecisionTreeClassifier<f64, i32, FeatureMatrix, ClassIndices>),
    RandomForest(RandomForestClassifier<f64, i32, FeatureMatrix, ClassIndices>),
}

impl Estimator {
    fn predict(&self, x: &FeatureMatrix) -> Result<ClassIndices, String> {
        match self {
            Estimator::DecisionTree(tree) => tree.predict(x).map_err(|e| e.to_string()),
            Estimator::RandomForest(forest) => forest.predict(x).map_err(|e| e.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::DecisionTree(_) => "decision tree",
            Estimator::RandomForest(_) => "random forest",
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Display name, e.g. "Risk model"
    pub name: String,
    /// Column order of the matrix the estimator was fitted on
    pub feature_names: Vec<String>,
    /// Label for class index `i` is `class_labels[i]`
    pub class_labels: Vec<String>,
    pub estimator: Estimator,
}

impl ModelArtifact {
    pub fn new(
        name: impl Into<String>,
        feature_names: Vec<String>,
        class_labels: Vec<String>,
        estimator: Estimator,
    ) -> Self {
        Self {
            name: name.into(),
            feature_names,
            class_labels,
            estimator,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open model file: {:?}", path))?;
        let reader = BufReader::new(file);
        let artifact: Self = if is_json(path) {
            serde_json::from_reader(reader)
                .context(format!("Failed to deserialize JSON model: {:?}", path))?
        } else {
            bincode::deserialize_from(reader)
                .context(format!("Failed to deserialize binary model: {:?}", path))?
        };
        artifact
            .validate()
            .context(format!("Invalid model artifact: {:?}", path))?;
        Ok(artifact)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        if is_json(path) {
            serde_json::to_writer(writer, self)
                .context(format!("Failed to serialize model to: {}", path.display()))
        } else {
            bincode::serialize_into(writer, self)
                .context(format!("Failed to serialize model to: {}", path.display()))
        }
    }

    /// The artifact must be fitted on exactly the two feature columns and
    /// name at least one class.
    pub fn validate(&self) -> Result<()> {
        let expected = FEATURE_COLUMNS.iter().sorted().join(", ");
        let actual = self.feature_names.iter().sorted().join(", ");
        if expected != actual {
            bail!(
                "{} expects features [{}], but the dashboard provides [{}]",
                self.name,
                self.feature_names.join(", "),
                FEATURE_COLUMNS.join(", ")
            );
        }
        ensure!(
            !self.class_labels.is_empty(),
            "{} has no class labels",
            self.name
        );
        Ok(())
    }

    fn label_for(&self, class_index: i32) -> Result<String, PredictionError> {
        usize::try_from(class_index)
            .ok()
            .and_then(|idx| self.class_labels.get(idx))
            .cloned()
            .ok_or_else(|| {
                PredictionError::model_failure(
                    &self.name,
                    format!(
                        "class index {} has no label ({} labels known)",
                        class_index,
                        self.class_labels.len()
                    ),
                )
            })
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, table: &FeatureTable) -> Result<Vec<String>, PredictionError> {
        if table.is_empty() {
            return Err(PredictionError::model_failure(&self.name, "no rows to predict"));
        }

        let rows = table.to_matrix(&self.feature_names)?;
        let x = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| PredictionError::model_failure(&self.name, e.to_string()))?;
        let classes = self
            .estimator
            .predict(&x)
            .map_err(|reason| PredictionError::model_failure(&self.name, reason))?;

        classes
            .into_iter()
            .map(|class_index| self.label_for(class_index))
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(JSON_ARTIFACT_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DAILY_RETURN_COLUMN, FeatureRow, SEVEN_DAY_MA_COLUMN};
    use smartcore::ensemble::random_forest_classifier::RandomForestClassifierParameters;
    use smartcore::tree::decision_tree_classifier::DecisionTreeClassifierParameters;
    use std::path::PathBuf;

    fn risk_labels() -> Vec<String> {
        vec!["Low Risk".into(), "Medium Risk".into(), "High Risk".into()]
    }

    // Columns are (7-Day MA, Daily Return) so the column mapping is exercised.
    fn training_set() -> (FeatureMatrix, ClassIndices) {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.1, -2.0],
            vec![0.4, -1.5],
            vec![0.2, 0.3],
            vec![0.9, 0.8],
            vec![0.5, 2.5],
            vec![1.2, 3.0],
        ])
        .unwrap();
        (x, vec![0, 0, 1, 1, 2, 2])
    }

    fn fitted_tree() -> Estimator {
        let (x, y) = training_set();
        let tree =
            DecisionTreeClassifier::fit(&x, &y, DecisionTreeClassifierParameters::default())
                .unwrap();
        Estimator::DecisionTree(tree)
    }

    fn fitted_forest() -> Estimator {
        let (x, y) = training_set();
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(8)
            .with_seed(7);
        Estimator::RandomForest(RandomForestClassifier::fit(&x, &y, params).unwrap())
    }

    fn artifact_with(estimator: Estimator) -> ModelArtifact {
        ModelArtifact::new(
            "Risk model",
            vec![SEVEN_DAY_MA_COLUMN.to_string(), DAILY_RETURN_COLUMN.to_string()],
            risk_labels(),
            estimator,
        )
    }

    fn fitted_artifact() -> ModelArtifact {
        artifact_with(fitted_tree())
    }

    fn temp_path(file_name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("risk_reward_simulator_{}", std::process::id()))
            .join(file_name)
    }

    #[test]
    fn test_fitted_tree_predicts_labels_in_row_order() {
        let artifact = fitted_artifact();
        let table = FeatureTable::new(vec![
            FeatureRow::new(-2.0, 0.1),
            FeatureRow::new(3.0, 1.2),
            FeatureRow::new(0.3, 0.2),
        ]);

        let labels = artifact.predict(&table).unwrap();
        assert_eq!(labels, vec!["Low Risk", "High Risk", "Medium Risk"]);
    }

    #[test]
    fn test_json_and_bincode_artifacts_load_back() {
        let table = FeatureTable::new(vec![FeatureRow::new(0.8, 0.9), FeatureRow::new(-1.5, 0.4)]);
        let estimators: [(fn() -> Estimator, &str); 2] = [
            (fitted_tree, "decision tree"),
            (fitted_forest, "random forest"),
        ];

        for (fit, kind) in estimators {
            let artifact = artifact_with(fit());
            let expected = artifact.predict(&table).unwrap();
            assert_eq!(expected.len(), 2);

            for file_name in ["risk_model.json", "risk_model.bin"] {
                let path = temp_path(&format!("{}_{}", kind.replace(' ', "_"), file_name));
                artifact.save_to_path(&path).unwrap();

                let loaded = ModelArtifact::load_from_path(&path).unwrap();
                assert_eq!(loaded.name(), "Risk model");
                assert_eq!(loaded.estimator.kind(), kind);
                assert_eq!(loaded.predict(&table).unwrap(), expected, "{} {}", kind, file_name);

                let _ = std::fs::remove_file(&path);
            }
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = temp_path("does_not_exist.json");
        let err = ModelArtifact::load_from_path(&path).err().unwrap();
        assert!(format!("{:#}", err).contains("does_not_exist.json"));
    }

    #[test]
    fn test_validate_rejects_foreign_features() {
        let mut artifact = fitted_artifact();
        artifact.feature_names = vec!["Close".into(), DAILY_RETURN_COLUMN.into()];
        assert!(artifact.validate().is_err());

        let mut artifact = fitted_artifact();
        artifact.class_labels.clear();
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_class_index_without_label_is_a_model_failure() {
        let mut artifact = fitted_artifact();
        artifact.class_labels.truncate(2);
        let table = FeatureTable::single(FeatureRow::new(3.0, 1.2));

        match artifact.predict(&table) {
            Err(PredictionError::ModelInvocationFailed { model, reason }) => {
                assert_eq!(model, "Risk model");
                assert!(reason.contains("class index 2"));
            }
            other => panic!("expected ModelInvocationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = fitted_artifact().predict(&FeatureTable::default()).unwrap_err();
        assert_eq!(err.kind(), "Model invocation failed");
    }
}
