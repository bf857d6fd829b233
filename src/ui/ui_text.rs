//! Every user-facing string in the dashboard.

pub struct UiText {
    pub app_title: &'static str,
    pub intro_lines: &'static [&'static str],

    // Interactive tab
    pub interactive_heading: &'static str,
    pub daily_return_input_label: &'static str,
    pub seven_day_ma_input_label: &'static str,
    pub predict_button: &'static str,
    pub risk_category_prefix: &'static str,
    pub reward_category_prefix: &'static str,
    pub risk_descriptions_heading: &'static str,
    pub risk_descriptions: &'static [(&'static str, &'static str)],
    pub reward_descriptions_heading: &'static str,
    pub reward_descriptions: &'static [(&'static str, &'static str)],
    pub unrecognized_label_note: &'static str,
    pub visualization_heading: &'static str,
    pub level_chart_title: &'static str,
    pub level_axis_label: &'static str,
    pub level_tick_labels: [&'static str; 3],
    pub prediction_error_prefix: &'static str,

    // Historical tab
    pub historical_heading: &'static str,
    pub upload_label: &'static str,
    pub upload_hint: &'static str,
    pub upload_path_placeholder: &'static str,
    pub load_button: &'static str,
    pub upload_source_prefix: &'static str,
    pub uploaded_data_heading: &'static str,
    pub predictions_data_heading: &'static str,
    pub visualizations_heading: &'static str,
    pub feature_trend_title: &'static str,
    pub average_daily_return_label: &'static str,
    pub risk_distribution_heading: &'static str,
    pub reward_distribution_heading: &'static str,
    pub analysis_error_prefix: &'static str,
    pub row_index_header: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Risk-Reward Simulator Using Daily Return and 7-Day Moving Average",
    intro_lines: &[
        "This app allows you to predict Risk and Reward categories for stock data using Daily Return and 7-Day Moving Average:",
        "1. Interactive Predictions: Enter stock data to predict risk and reward.",
        "2. Historical Data Analysis: Upload a CSV file to analyze risk-reward trends over time.",
    ],

    interactive_heading: "Interactive Predictions",
    daily_return_input_label: "Enter Daily Return (%):",
    seven_day_ma_input_label: "Enter 7-Day Moving Average (%):",
    predict_button: "Predict",
    risk_category_prefix: "Predicted Risk Category: ",
    reward_category_prefix: "Predicted Reward Category: ",
    risk_descriptions_heading: "Risk Category Descriptions",
    risk_descriptions: &[
        ("Low Risk", "Minimal price fluctuations, safe investments."),
        ("Medium Risk", "Moderate price fluctuations, balanced risk and return."),
        ("High Risk", "Significant price fluctuations, high potential for losses or gains."),
    ],
    reward_descriptions_heading: "Reward Category Descriptions",
    reward_descriptions: &[
        ("Low Reward", "Small expected returns, stable performance."),
        ("Medium Reward", "Moderate returns, some risk involved."),
        ("High Reward", "High potential returns, with accompanying risks."),
    ],
    unrecognized_label_note: "is not a known category and is charted as Low",
    visualization_heading: "Visualization of Predictions",
    level_chart_title: "Predicted Risk and Reward Levels",
    level_axis_label: "Category Level",
    level_tick_labels: ["Low", "Medium", "High"],
    prediction_error_prefix: "Error",

    historical_heading: "Historical Data Analysis",
    upload_label: "Upload a CSV File",
    upload_hint: "Drop a .csv file onto the window, or enter its path and press Load CSV",
    upload_path_placeholder: "path/to/history.csv",
    load_button: "Load CSV",
    upload_source_prefix: "Source: ",
    uploaded_data_heading: "Uploaded Historical Data:",
    predictions_data_heading: "Historical Data with Predictions:",
    visualizations_heading: "Visualizations",
    feature_trend_title: "Daily Return and 7-Day MA",
    average_daily_return_label: "Average Daily Return",
    risk_distribution_heading: "Risk Distribution:",
    reward_distribution_heading: "Reward Distribution:",
    analysis_error_prefix: "Error during analysis",
    row_index_header: "#",
};
