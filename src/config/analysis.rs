//! Batch analysis and table display configuration

pub struct AnalysisConfig {
    /// Rows shown in the raw upload preview (before any prediction runs)
    pub preview_rows: usize,
    /// Max height of the scrollable data tables (in points)
    pub table_max_height: f32,
    /// Decimal places shown for the numeric inputs and the mean metric
    pub display_decimals: usize,
    /// Drag step for the numeric inputs
    pub input_step: f64,
    /// Only dropped files with this extension are taken as uploads
    pub upload_extension: &'static str,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    preview_rows: 5,
    table_max_height: 260.0,
    display_decimals: 2,
    input_step: 0.01,
    upload_extension: "csv",
};
