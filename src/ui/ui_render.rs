use eframe::egui::{
    CentralPanel, Context, Frame, Grid, Margin, RichText, ScrollArea, TextStyle, TopBottomPanel, Ui,
};

use crate::analysis::{BatchAnalysis, SinglePrediction};
use crate::config::ANALYSIS;
use crate::config::plot::PLOT_CONFIG;
use crate::data::DataTable;
use crate::domain::{CategoryPrediction, PredictionError, PredictionTarget};
use crate::ui::app_state::DashboardTab;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    InteractiveEvent, InteractivePanel, Panel, TabBarPanel, UploadEvent, UploadPanel,
};
use crate::ui::ui_plot_view::{show_feature_lines, show_label_counts, show_level_chart};
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

use super::app::RiskRewardApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RiskRewardApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::symmetric(12, 8));
        TopBottomPanel::top("title_panel")
            .frame(top_frame)
            .show(ctx, |ui| {
                ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                ui.add_space(4.0);
                for line in UI_TEXT.intro_lines {
                    ui.label(*line);
                }
                ui.add_space(8.0);

                for tab in TabBarPanel::new(self.state.selected_tab).render(ui) {
                    if tab != self.state.selected_tab {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Switched to tab: {}", tab);
                        }
                        self.state.selected_tab = tab;
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.state.selected_tab {
                        DashboardTab::Interactive => self.render_interactive_tab(ui),
                        DashboardTab::Historical => self.render_historical_tab(ui),
                    });
            });
    }

    fn render_interactive_tab(&mut self, ui: &mut Ui) {
        let events =
            InteractivePanel::new(self.state.daily_return, self.state.seven_day_ma).render(ui);
        for event in events {
            match event {
                InteractiveEvent::DailyReturn(value) => self.set_daily_return(value),
                InteractiveEvent::SevenDayMa(value) => self.set_seven_day_ma(value),
                InteractiveEvent::Predict => self.run_single_prediction(),
            }
        }

        match &self.interactive.outcome {
            Some(Ok(prediction)) => render_single_prediction(ui, prediction),
            Some(Err(error)) => render_error(ui, UI_TEXT.prediction_error_prefix, error),
            None => {}
        }
    }

    fn render_historical_tab(&mut self, ui: &mut Ui) {
        let events = UploadPanel::new(self.historical.path_input.clone()).render(ui);
        for event in events {
            match event {
                UploadEvent::PathEdited(path) => self.historical.path_input = path,
                UploadEvent::Load(path) => self.load_upload_from_path(&path),
            }
        }

        if let Some(error) = &self.historical.upload_error {
            render_error(ui, UI_TEXT.analysis_error_prefix, error);
        }

        let Some(upload) = &self.historical.upload else {
            return;
        };

        ui.label(colored_subsection_heading(UI_TEXT.uploaded_data_heading));
        ui.label_subdued(format!("{}{}", UI_TEXT.upload_source_prefix, upload.source));
        render_data_table(ui, "upload_preview", &upload.table.head(ANALYSIS.preview_rows));
        spaced_separator(ui);

        // The preview above stays visible whatever happens below
        match &self.historical.analysis {
            Some(Ok(analysis)) => render_batch_analysis(ui, analysis),
            Some(Err(error)) => render_error(ui, UI_TEXT.analysis_error_prefix, error),
            None => {}
        }
    }
}

fn render_error(ui: &mut Ui, prefix: &str, error: &PredictionError) {
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label_error(format!("{}: {}", prefix, error));
        ui.label_subdued(error.kind());
    });
    ui.add_space(6.0);
}

fn render_category(
    ui: &mut Ui,
    prefix: &str,
    prediction: &CategoryPrediction,
    descriptions_heading: &str,
    descriptions: &[(&str, &str)],
) {
    ui.heading(format!("{}{}", prefix, prediction.label));
    if !prediction.level.is_recognized() {
        ui.label_warning(format!(
            "'{}' {}",
            prediction.label, UI_TEXT.unrecognized_label_note
        ));
    }
    ui.add_space(4.0);
    ui.label(RichText::new(format!("{}:", descriptions_heading)).strong());
    for (category, description) in descriptions {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("• {}:", category)).strong());
            ui.label(*description);
        });
    }
    ui.add_space(10.0);
}

fn render_single_prediction(ui: &mut Ui, prediction: &SinglePrediction) {
    ui.add_space(10.0);
    render_category(
        ui,
        UI_TEXT.risk_category_prefix,
        prediction.get(PredictionTarget::Risk),
        UI_TEXT.risk_descriptions_heading,
        UI_TEXT.risk_descriptions,
    );
    render_category(
        ui,
        UI_TEXT.reward_category_prefix,
        prediction.get(PredictionTarget::Reward),
        UI_TEXT.reward_descriptions_heading,
        UI_TEXT.reward_descriptions,
    );

    section_heading(ui, UI_TEXT.visualization_heading);
    show_level_chart(ui, prediction);
}

fn render_batch_analysis(ui: &mut Ui, analysis: &BatchAnalysis) {
    ui.label(colored_subsection_heading(UI_TEXT.predictions_data_heading));
    render_data_table(ui, "augmented_table", &analysis.table);

    section_heading(ui, UI_TEXT.visualizations_heading);
    show_feature_lines(ui, analysis);
    ui.add_space(10.0);

    ui.metric_large(
        UI_TEXT.average_daily_return_label,
        &analysis.mean_daily_return_display(),
    );
    spaced_separator(ui);

    ui.label(colored_subsection_heading(UI_TEXT.risk_distribution_heading));
    show_label_counts(
        ui,
        "risk_counts",
        analysis.counts(PredictionTarget::Risk),
        PLOT_CONFIG.risk_count_color,
    );
    ui.add_space(10.0);

    ui.label(colored_subsection_heading(UI_TEXT.reward_distribution_heading));
    show_label_counts(
        ui,
        "reward_counts",
        analysis.counts(PredictionTarget::Reward),
        PLOT_CONFIG.reward_count_color,
    );
}

/// Striped grid with a leading row-index column.
/// Only the rows inside the scroll viewport are laid out; the header row stays on top.
fn render_data_table(ui: &mut Ui, id: &str, table: &DataTable) {
    let row_height = ui.text_style_height(&TextStyle::Body);
    let row_spacing = ui.spacing().item_spacing.y;

    ScrollArea::both()
        .id_salt(id)
        .max_height(ANALYSIS.table_max_height)
        .auto_shrink([false, true])
        .show_rows(ui, row_height, table.row_count(), |ui, visible| {
            let first_row = visible.start;
            Grid::new(id)
                .striped(true)
                .spacing([UI_CONFIG.table_column_spacing, row_spacing])
                .show(ui, |ui| {
                    let header_color = UI_CONFIG.colors.table_header;
                    ui.label(RichText::new(UI_TEXT.row_index_header).color(header_color));
                    for header in table.headers() {
                        ui.label(RichText::new(header).strong().color(header_color));
                    }
                    ui.end_row();

                    for (offset, row) in table.rows_in(visible).iter().enumerate() {
                        let idx = first_row + offset;
                        ui.label(RichText::new(idx.to_string()).color(UI_CONFIG.colors.label));
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
