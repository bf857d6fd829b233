//! Chart rendering for both tabs.

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Line, Plot, PlotPoints};
use strum::IntoEnumIterator;

use crate::analysis::{BatchAnalysis, LabelCount, SinglePrediction};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{CategoryLevel, PredictionTarget};
use crate::ui::ui_text::UI_TEXT;

const TICK_TOLERANCE: f64 = 1e-6;

/// Fixed y ticks of the level chart: Low, Medium, High.
const LEVEL_TICKS: [CategoryLevel; 3] =
    [CategoryLevel::Low, CategoryLevel::Medium, CategoryLevel::High];

fn target_color(target: PredictionTarget) -> Color32 {
    match target {
        PredictionTarget::Risk => PLOT_CONFIG.risk_bar_color,
        PredictionTarget::Reward => PLOT_CONFIG.reward_bar_color,
    }
}

/// Tick label for a y value on the level chart ("" between ticks).
pub fn level_tick_label(value: f64) -> String {
    LEVEL_TICKS
        .iter()
        .zip(UI_TEXT.level_tick_labels)
        .find(|(level, _)| (level.height() - value).abs() < TICK_TOLERANCE)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

/// Label for an integer x position; "" when `value` is not on a bar.
pub fn category_tick_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > TICK_TOLERANCE || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

fn integer_marks(count: usize) -> Vec<GridMark> {
    (0..count)
        .map(|i| GridMark {
            value: i as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Two bars (Risk, Reward) on a fixed Low/Medium/High axis.
pub fn show_level_chart(ui: &mut egui::Ui, prediction: &SinglePrediction) {
    let categories: Vec<String> = PredictionTarget::iter().map(|t| t.to_string()).collect();
    let category_count = categories.len();

    ui.label(egui::RichText::new(UI_TEXT.level_chart_title).strong());
    Plot::new("level_chart")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default().position(Corner::RightTop))
        .y_axis_label(UI_TEXT.level_axis_label)
        .x_axis_formatter(move |mark, _range| category_tick_label(&categories, mark.value))
        .y_axis_formatter(|mark, _range| level_tick_label(mark.value))
        .x_grid_spacer(move |_input| integer_marks(category_count))
        .y_grid_spacer(|_input| {
            LEVEL_TICKS
                .iter()
                .map(|level| GridMark {
                    value: level.height(),
                    step_size: 0.5,
                })
                .collect()
        })
        .label_formatter(|_, _| String::new())
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-0.5..=(category_count as f64 - 0.5));
            plot_ui.set_plot_bounds_y(0.0..=PLOT_CONFIG.level_chart_y_max);

            for (idx, target) in PredictionTarget::iter().enumerate() {
                let bar = Bar::new(idx as f64, prediction.get(target).height())
                    .width(PLOT_CONFIG.bar_width)
                    .name(target.to_string());
                plot_ui.bar_chart(
                    BarChart::new(target.to_string(), vec![bar]).color(target_color(target)),
                );
            }
        });
}

/// Both input features plotted against row index.
pub fn show_feature_lines(ui: &mut egui::Ui, analysis: &BatchAnalysis) {
    let colors = [
        PLOT_CONFIG.daily_return_line_color,
        PLOT_CONFIG.moving_average_line_color,
    ];

    ui.label(egui::RichText::new(UI_TEXT.feature_trend_title).strong());
    Plot::new("feature_lines")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default().position(Corner::RightTop))
        .show_axes([true, true])
        .show_grid([true, true])
        .show(ui, |plot_ui| {
            for ((name, values), color) in analysis.feature_series().into_iter().zip(colors) {
                let points: Vec<[f64; 2]> = values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                plot_ui.line(
                    Line::new(name, PlotPoints::from(points))
                        .color(color)
                        .width(PLOT_CONFIG.line_width),
                );
            }
        });
}

/// Frequency of each label, one bar per label.
pub fn show_label_counts(ui: &mut egui::Ui, id: &str, counts: &[LabelCount], color: Color32) {
    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();
    let label_count = labels.len();

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .width(PLOT_CONFIG.bar_width)
                .name(&c.label)
        })
        .collect();

    Plot::new(id)
        .height(PLOT_CONFIG.chart_height)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_tick_label(&labels, mark.value))
        .x_grid_spacer(move |_input| integer_marks(label_count))
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id, bars).color(color));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ticks() {
        assert_eq!(level_tick_label(0.0), "Low");
        assert_eq!(level_tick_label(0.5), "Medium");
        assert_eq!(level_tick_label(1.0), "High");
        assert_eq!(level_tick_label(0.25), "");
        assert_eq!(level_tick_label(1.1), "");
    }

    #[test]
    fn test_category_ticks_only_on_bars() {
        let labels = vec!["Risk".to_string(), "Reward".to_string()];
        assert_eq!(category_tick_label(&labels, 0.0), "Risk");
        assert_eq!(category_tick_label(&labels, 1.0), "Reward");
        assert_eq!(category_tick_label(&labels, 0.5), "");
        assert_eq!(category_tick_label(&labels, 2.0), "");
        assert_eq!(category_tick_label(&labels, -1.0), "");
    }
}
