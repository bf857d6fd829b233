//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Bar color for the risk level (single-sample chart)
    pub risk_bar_color: Color32,
    /// Bar color for the reward level (single-sample chart)
    pub reward_bar_color: Color32,
    pub daily_return_line_color: Color32,
    pub moving_average_line_color: Color32,
    /// Bar colors for the label frequency charts
    pub risk_count_color: Color32,
    pub reward_count_color: Color32,
    /// Upper y bound of the level chart; a little headroom above High (1.0)
    pub level_chart_y_max: f64,
    /// Fraction of the unit x slot a bar occupies
    pub bar_width: f64,
    pub line_width: f32,
    pub chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    risk_bar_color: Color32::from_rgb(31, 119, 180), // Blue
    reward_bar_color: Color32::from_rgb(44, 160, 44), // Green
    daily_return_line_color: Color32::from_rgb(100, 200, 255),
    moving_average_line_color: Color32::from_rgb(255, 165, 0),
    risk_count_color: Color32::from_rgb(255, 100, 100),
    reward_count_color: Color32::from_rgb(130, 200, 140),
    level_chart_y_max: 1.1,
    bar_width: 0.6,
    line_width: 2.0,
    chart_height: 240.0,
};
