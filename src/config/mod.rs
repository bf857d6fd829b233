//! Configuration module for the risk-reward simulator.

pub mod analysis;
pub mod models;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use models::{MODELS, ModelPaths};
pub use persistence::APP_STATE_PATH;
