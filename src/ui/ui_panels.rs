use std::path::PathBuf;

use eframe::egui::{DragValue, Key, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
use crate::ui::app_state::DashboardTab;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Tab selector shown under the title
pub struct TabBarPanel {
    selected_tab: DashboardTab,
}

impl TabBarPanel {
    pub fn new(selected_tab: DashboardTab) -> Self {
        Self { selected_tab }
    }
}

impl Panel for TabBarPanel {
    type Event = DashboardTab;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for tab in DashboardTab::iter() {
                if ui
                    .selectable_value(&mut self.selected_tab, tab, tab.to_string())
                    .clicked()
                {
                    events.push(tab);
                }
            }
        });
        events
    }
}

/// Panel with the two numeric inputs and the Predict trigger
pub struct InteractivePanel {
    daily_return: f64,
    seven_day_ma: f64,
}

impl InteractivePanel {
    pub fn new(daily_return: f64, seven_day_ma: f64) -> Self {
        Self {
            daily_return,
            seven_day_ma,
        }
    }

    fn render_percent_input(ui: &mut Ui, label: &str, value: &mut f64) -> bool {
        ui.label(colored_subsection_heading(label));
        ui.add(
            DragValue::new(value)
                .speed(ANALYSIS.input_step)
                .fixed_decimals(ANALYSIS.display_decimals)
                .suffix("%"),
        )
        .changed()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractiveEvent {
    DailyReturn(f64),
    SevenDayMa(f64),
    Predict,
}

impl Panel for InteractivePanel {
    type Event = InteractiveEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.interactive_heading);

        let label = UI_TEXT.daily_return_input_label;
        if Self::render_percent_input(ui, label, &mut self.daily_return) {
            events.push(InteractiveEvent::DailyReturn(self.daily_return));
        }
        ui.add_space(5.0);
        let label = UI_TEXT.seven_day_ma_input_label;
        if Self::render_percent_input(ui, label, &mut self.seven_day_ma) {
            events.push(InteractiveEvent::SevenDayMa(self.seven_day_ma));
        }
        ui.add_space(10.0);

        if ui.button(UI_TEXT.predict_button).clicked() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!(
                    "Predict pressed with ({:.2}, {:.2})",
                    self.daily_return,
                    self.seven_day_ma
                );
            }
            events.push(InteractiveEvent::Predict);
        }
        ui.add_space(10.0);
        events
    }
}

/// Upload control for the historical tab
pub struct UploadPanel {
    path_input: String,
}

impl UploadPanel {
    pub fn new(path_input: String) -> Self {
        Self { path_input }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    PathEdited(String),
    Load(PathBuf),
}

impl Panel for UploadPanel {
    type Event = UploadEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.historical_heading);

        ui.label(colored_subsection_heading(UI_TEXT.upload_label));
        ui.label_subdued(UI_TEXT.upload_hint);

        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.path_input)
                    .hint_text(UI_TEXT.upload_path_placeholder)
                    .desired_width(320.0),
            );
            if response.changed() {
                events.push(UploadEvent::PathEdited(self.path_input.clone()));
            }

            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let has_path = !self.path_input.trim().is_empty();
            let clicked = ui
                .add_enabled(has_path, eframe::egui::Button::new(UI_TEXT.load_button))
                .clicked();

            if has_path && (clicked || submitted) {
                events.push(UploadEvent::Load(PathBuf::from(self.path_input.trim())));
            }
        });

        ui.add_space(10.0);
        events
    }
}
