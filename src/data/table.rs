//! The uploaded CSV as a plain string table.
//!
//! Cells are kept exactly as read so the preview shows the file as uploaded.
//! Only the two feature columns are ever parsed as numbers.

use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::Path;

use crate::domain::{
    DAILY_RETURN_COLUMN, FEATURE_COLUMNS, FeatureRow, FeatureTable, PredictionError,
    SEVEN_DAY_MA_COLUMN,
};

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Comma separated, first record is the header. Ragged rows are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PredictionError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| PredictionError::MalformedUpload(e.to_string()))?
            .iter()
            .map(|h| h.trim_start_matches(UTF8_BOM).trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(PredictionError::MalformedUpload(
                "no header row found".to_string(),
            ));
        }

        let rows = csv_reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| PredictionError::MalformedUpload(e.to_string()))
            })
            .collect::<Result<Vec<Vec<String>>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, PredictionError> {
        Self::from_reader(bytes)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, PredictionError> {
        let file = File::open(path).map_err(|e| {
            PredictionError::MalformedUpload(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rows within `range`, clamped to the table.
    pub fn rows_in(&self, range: Range<usize>) -> &[Vec<String>] {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        &self.rows[start..end]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The first `n` rows, all columns.
    pub fn head(&self, n: usize) -> DataTable {
        Self {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Parses every cell of one column as a finite `f64`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, PredictionError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| PredictionError::MissingColumns(vec![name.to_string()]))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                cell.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| PredictionError::InvalidFeatureValue {
                        column: name.to_string(),
                        row: row_idx + 1,
                        value: cell.to_string(),
                    })
            })
            .collect()
    }

    /// The two model inputs, one `FeatureRow` per data row.
    /// All missing feature columns are reported together.
    pub fn feature_table(&self) -> Result<FeatureTable, PredictionError> {
        let missing: Vec<String> = FEATURE_COLUMNS
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PredictionError::MissingColumns(missing));
        }

        let daily_returns = self.numeric_column(DAILY_RETURN_COLUMN)?;
        let moving_averages = self.numeric_column(SEVEN_DAY_MA_COLUMN)?;

        Ok(daily_returns
            .into_iter()
            .zip(moving_averages)
            .map(|(daily_return, seven_day_ma)| FeatureRow::new(daily_return, seven_day_ma))
            .collect::<Vec<_>>()
            .into())
    }

    /// Sets column `name` to `values`: replaced in place when it exists,
    /// appended otherwise. `values` must hold one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }
}
