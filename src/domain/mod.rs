// Domain types and value objects
pub mod category;
pub mod errors;
pub mod features;

// Re-export commonly used types
pub use category::{CategoryLevel, CategoryPrediction, PredictionTarget};
pub use errors::PredictionError;
pub use features::{
    DAILY_RETURN_COLUMN, FEATURE_COLUMNS, FeatureRow, FeatureTable, SEVEN_DAY_MA_COLUMN,
};
