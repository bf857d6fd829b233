use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::{Frame, egui};

use crate::analysis::{BatchAnalysis, BatchPredictor, SinglePrediction, SingleSamplePredictor};
use crate::config::ANALYSIS;
use crate::data::DataTable;
use crate::domain::PredictionError;
use crate::models::ModelStore;
use crate::ui::app_state::{AppState, DashboardTab};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Outcome of the last Predict press. Replaced on every press.
#[derive(Default)]
pub(super) struct InteractiveState {
    pub outcome: Option<Result<SinglePrediction, PredictionError>>,
}

/// A parsed upload, kept for the preview even when prediction fails.
pub(super) struct Upload {
    pub source: String,
    pub table: DataTable,
}

#[derive(Default)]
pub(super) struct HistoricalState {
    pub path_input: String,
    pub upload: Option<Upload>,
    /// Set when the file itself could not be read (nothing to preview)
    pub upload_error: Option<PredictionError>,
    pub analysis: Option<Result<BatchAnalysis, PredictionError>>,
}

pub struct RiskRewardApp {
    pub(super) state: AppState,
    pub(super) single_predictor: SingleSamplePredictor,
    pub(super) batch_predictor: BatchPredictor,
    pub(super) interactive: InteractiveState,
    pub(super) historical: HistoricalState,
}

impl RiskRewardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: Arc<ModelStore>,
        initial_upload: Option<PathBuf>,
    ) -> Self {
        // Attempt to load the persisted state
        let state = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppState>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted UI state found. Creating anew.");
                }
                AppState::default()
            });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Starting with UI state: {:?}", state);
        }

        let mut app = Self::with_state(state, store);
        if let Some(path) = initial_upload {
            app.historical.path_input = path.display().to_string();
            app.load_upload_from_path(&path);
            app.state.selected_tab = DashboardTab::Historical;
        }
        app
    }

    pub(crate) fn with_state(state: AppState, store: Arc<ModelStore>) -> Self {
        Self {
            state,
            single_predictor: SingleSamplePredictor::new(Arc::clone(&store)),
            batch_predictor: BatchPredictor::new(store),
            interactive: InteractiveState::default(),
            historical: HistoricalState::default(),
        }
    }

    /// Editing an input invalidates the prediction made for the old values.
    pub(super) fn set_daily_return(&mut self, value: f64) {
        if value != self.state.daily_return {
            self.state.daily_return = value;
            self.interactive.outcome = None;
        }
    }

    pub(super) fn set_seven_day_ma(&mut self, value: f64) {
        if value != self.state.seven_day_ma {
            self.state.seven_day_ma = value;
            self.interactive.outcome = None;
        }
    }

    pub(super) fn run_single_prediction(&mut self) {
        let outcome = self.single_predictor.predict(self.state.features());
        if let Err(e) = &outcome {
            log::warn!("Single-sample prediction failed: {}", e);
        }
        self.interactive.outcome = Some(outcome);
    }

    pub(super) fn load_upload_from_path(&mut self, path: &Path) {
        let parsed = DataTable::load_from_path(path);
        self.ingest_upload(path.display().to_string(), parsed);
    }

    pub(super) fn load_upload_from_bytes(&mut self, source: String, bytes: &[u8]) {
        let parsed = DataTable::from_csv_bytes(bytes);
        self.ingest_upload(source, parsed);
    }

    /// Replaces the current upload and immediately runs the batch predictor on it.
    pub(super) fn ingest_upload(
        &mut self,
        source: String,
        parsed: Result<DataTable, PredictionError>,
    ) {
        self.historical.analysis = None;

        let table = match parsed {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Could not read upload {}: {}", source, e);
                self.historical.upload = None;
                self.historical.upload_error = Some(e);
                return;
            }
        };

        log::info!(
            "Loaded upload {} ({} rows x {} columns)",
            source,
            table.row_count(),
            table.column_count()
        );

        let analysis = self.batch_predictor.analyse(&table);
        if let Err(e) = &analysis {
            log::warn!("Analysis of {} failed: {}", source, e);
        }

        self.historical.upload_error = None;
        self.historical.upload = Some(Upload { source, table });
        self.historical.analysis = Some(analysis);
    }

    /// Files dropped onto the window are treated as uploads.
    /// Only the first `.csv` is used; anything else is logged and ignored.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let (csv_files, others): (Vec<_>, Vec<_>) = dropped.into_iter().partition(is_csv_drop);
        for file in &others {
            log::warn!("Ignoring dropped file '{}': not a .csv file", drop_display_name(file));
        }
        let Some(file) = csv_files.into_iter().next() else {
            return;
        };

        self.state.selected_tab = DashboardTab::Historical;
        if let Some(bytes) = file.bytes.as_deref() {
            self.load_upload_from_bytes(drop_display_name(&file), bytes);
        } else if let Some(path) = file.path.as_deref() {
            self.historical.path_input = path.display().to_string();
            self.load_upload_from_path(path);
        } else {
            log::warn!("Dropped file '{}' carried neither a path nor contents", file.name);
        }
    }
}

fn drop_display_name(file: &egui::DroppedFile) -> String {
    match &file.path {
        Some(path) if file.name.is_empty() => path.display().to_string(),
        _ => file.name.clone(),
    }
}

/// Native drops carry a path, web-style drops only a name.
fn is_csv_drop(file: &egui::DroppedFile) -> bool {
    let name = file
        .path
        .as_deref()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .unwrap_or(&file.name);
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ANALYSIS.upload_extension))
}

impl eframe::App for RiskRewardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_dropped_files(ctx);

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}
