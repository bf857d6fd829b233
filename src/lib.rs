#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;

use std::path::PathBuf;
use std::sync::Arc;

// Re-export commonly used types
pub use analysis::{BatchAnalysis, BatchPredictor, SinglePrediction, SingleSamplePredictor};
pub use data::DataTable;
pub use domain::{CategoryLevel, FeatureRow, PredictionError, PredictionTarget};
pub use models::{Classifier, ModelArtifact, ModelStore};
pub use ui::RiskRewardApp;

// CLI argument parsing
use clap::Parser;

use crate::config::MODELS;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Risk model artifact (.json, or bincode for any other extension)
    #[arg(long, default_value = MODELS.risk_model_path)]
    pub risk_model: PathBuf,

    /// Reward model artifact (.json, or bincode for any other extension)
    #[arg(long, default_value = MODELS.reward_model_path)]
    pub reward_model: PathBuf,

    /// CSV to load into the Historical Data Analysis tab on start-up
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    store: Arc<ModelStore>,
    initial_upload: Option<PathBuf>,
) -> Box<dyn eframe::App> {
    let app = ui::RiskRewardApp::new(cc, store, initial_upload);
    Box::new(app)
}
