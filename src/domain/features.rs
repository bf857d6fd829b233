use serde::{Deserialize, Serialize};

use crate::domain::errors::PredictionError;

/// Exact (case-sensitive) column names the models were fitted with.
pub const DAILY_RETURN_COLUMN: &str = "Daily Return";
pub const SEVEN_DAY_MA_COLUMN: &str = "7-Day MA";
pub const FEATURE_COLUMNS: [&str; 2] = [DAILY_RETURN_COLUMN, SEVEN_DAY_MA_COLUMN];

/// One observation of the two model inputs. No range constraint is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureRow {
    pub daily_return: f64,
    pub seven_day_ma: f64,
}

impl FeatureRow {
    pub fn new(daily_return: f64, seven_day_ma: f64) -> Self {
        Self {
            daily_return,
            seven_day_ma,
        }
    }

    /// Looks a feature up by its column name.
    pub fn value(&self, column: &str) -> Option<f64> {
        match column {
            DAILY_RETURN_COLUMN => Some(self.daily_return),
            SEVEN_DAY_MA_COLUMN => Some(self.seven_day_ma),
            _ => None,
        }
    }
}

/// The table handed to a classifier: the two feature columns, rows in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub fn single(row: FeatureRow) -> Self {
        Self { rows: vec![row] }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        self.rows.iter().map(|row| row.value(name)).collect()
    }

    /// Row-major matrix with columns laid out in `column_order`.
    /// Fails with `MissingColumns` for any name that is not a feature column.
    pub fn to_matrix(&self, column_order: &[String]) -> Result<Vec<Vec<f64>>, PredictionError> {
        let unknown: Vec<String> = column_order
            .iter()
            .filter(|name| !FEATURE_COLUMNS.contains(&name.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(PredictionError::MissingColumns(unknown));
        }

        Ok(self
            .rows
            .iter()
            .map(|row| {
                column_order
                    .iter()
                    .filter_map(|name| row.value(name))
                    .collect()
            })
            .collect())
    }
}

impl From<Vec<FeatureRow>> for FeatureTable {
    fn from(rows: Vec<FeatureRow>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_follows_requested_column_order() {
        let table =
            FeatureTable::new(vec![FeatureRow::new(1.25, 0.80), FeatureRow::new(-0.5, 2.0)]);

        let fitted_order = vec![SEVEN_DAY_MA_COLUMN.to_string(), DAILY_RETURN_COLUMN.to_string()];
        let matrix = table.to_matrix(&fitted_order).unwrap();

        assert_eq!(matrix, vec![vec![0.80, 1.25], vec![2.0, -0.5]]);
    }

    #[test]
    fn test_matrix_rejects_unknown_column() {
        let table = FeatureTable::single(FeatureRow::new(1.0, 1.0));
        let order = vec![DAILY_RETURN_COLUMN.to_string(), "Volume".to_string()];

        match table.to_matrix(&order) {
            Err(PredictionError::MissingColumns(names)) => assert_eq!(names, vec!["Volume"]),
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_column_extraction() {
        let table = FeatureTable::new(vec![FeatureRow::new(1.0, 1.0), FeatureRow::new(2.0, 1.5)]);
        assert_eq!(table.column(DAILY_RETURN_COLUMN), Some(vec![1.0, 2.0]));
        assert_eq!(table.column(SEVEN_DAY_MA_COLUMN), Some(vec![1.0, 1.5]));
        assert_eq!(table.column("Close"), None);
    }
}
