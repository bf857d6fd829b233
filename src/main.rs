#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::NativeOptions;

use risk_reward_simulator::config::APP_STATE_PATH;
use risk_reward_simulator::{
    Cli,        // The struct from lib.rs
    ModelStore, // Loaded once, shared read-only
    run_app,    // The function from lib.rs
};

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Model Loading (Blocking, fatal on failure)
    let store = ModelStore::load(&args.risk_model, &args.reward_model)
        .inspect_err(|e| log::error!("Failed to load models: {:#}", e))?;
    let store = Arc::new(store);

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    let initial_upload = args.csv;
    eframe::run_native(
        "Risk-Reward Simulator",
        options,
        Box::new(move |cc| Ok(run_app(cc, store, initial_upload))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("The dashboard window closed with an error")
}
