use eframe::egui;

use super::theme::Theme;
use crate::core::{
    form::FormFields,
    CropType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Analyze,
    Retrain,
}

pub struct CropForm;

impl CropForm {
    pub fn show(
        ui: &mut egui::Ui,
        fields: &mut FormFields,
        is_loading: bool,
        theme: &Theme,
    ) -> Option<FormAction> {
        let mut action = None;

        egui::Grid::new("crop_form_grid").num_columns(2).spacing([12.0, 10.0]).show(ui, |ui| {
            let submitted = [
                number_row(ui, "Temperature (°C):", &mut fields.temperature, "e.g. 22.5"),
                number_row(ui, "Rainfall (mm):", &mut fields.rainfall, "e.g. 100"),
                number_row(ui, "Soil pH:", &mut fields.soil_ph, "0 - 14"),
            ];
            if submitted.contains(&true) {
                action = Some(FormAction::Analyze);
            }

            ui.label("Crop Type:");
            egui::ComboBox::from_id_salt("crop_type")
                .selected_text(fields.crop_type.name())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for crop in CropType::ALL {
                        ui.selectable_value(&mut fields.crop_type, crop, crop.name());
                    }
                });
            ui.end_row();
        });

        ui.add_space(16.0);

        let analyze_label = if is_loading { "Analyzing..." } else { "Analyze Crop Yield" };
        if action_button(ui, analyze_label, theme.sky(ui.ctx()), !is_loading).clicked() {
            action = Some(FormAction::Analyze);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        let retrain_label = if is_loading { "Processing..." } else { "Retrain Model" };
        if action_button(ui, retrain_label, theme.teal(ui.ctx()), !is_loading).clicked() {
            action = Some(FormAction::Retrain);
        }

        // Enter in a field only counts while nothing is in flight.
        action.filter(|_| !is_loading)
    }
}

/// Returns true when Enter was pressed inside the field.
fn number_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value).hint_text(hint).desired_width(f32::INFINITY),
    );
    ui.end_row();

    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn action_button(
    ui: &mut egui::Ui,
    label: &str,
    fill: egui::Color32,
    enabled: bool,
) -> egui::Response {
    let text = egui::RichText::new(label).strong().color(egui::Color32::WHITE);
    let button = egui::Button::new(text)
        .fill(fill)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    ui.add_enabled(enabled, button)
}
