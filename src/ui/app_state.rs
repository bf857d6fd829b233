use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::domain::FeatureRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum DashboardTab {
    #[default]
    #[strum(to_string = "Interactive Predictions")]
    Interactive,
    #[strum(to_string = "Historical Data Analysis")]
    Historical,
}

/// The part of the UI that survives a restart (eframe storage).
/// Predictions and uploads are deliberately absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub selected_tab: DashboardTab,
    #[serde(default)]
    pub daily_return: f64,
    #[serde(default)]
    pub seven_day_ma: f64,
}

impl AppState {
    pub fn features(&self) -> FeatureRow {
        FeatureRow::new(self.daily_return, self.seven_day_ma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_state_files_fall_back_to_defaults() {
        let state: AppState = serde_json::from_str(r#"{"daily_return": 1.25}"#).unwrap();
        assert_eq!(state.selected_tab, DashboardTab::Interactive);
        assert_eq!(state.features(), FeatureRow::new(1.25, 0.0));
    }

    #[test]
    fn test_tab_titles() {
        assert_eq!(DashboardTab::Interactive.to_string(), "Interactive Predictions");
        assert_eq!(DashboardTab::Historical.to_string(), "Historical Data Analysis");
    }
}
