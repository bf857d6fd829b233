// The two predictors. Both are stateless: every call builds its input table,
// runs both models from the shared store, and returns a value for the UI.
pub mod batch;
pub mod single_sample;

// Re-export commonly used types
pub use batch::{BatchAnalysis, BatchPredictor, LabelCount, format_percent, value_counts};
pub use single_sample::{SinglePrediction, SingleSamplePredictor};
