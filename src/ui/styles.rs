use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Source:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a headline metric: small caption above a large value.
    fn metric_large(&mut self, label: &str, value: &str);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Yellow/Gold).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric_large(&mut self, label: &str, value: &str) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(
                RichText::new(value)
                    .size(28.0)
                    .strong()
                    .color(UI_CONFIG.colors.metric_value),
            );
        });
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }
}
