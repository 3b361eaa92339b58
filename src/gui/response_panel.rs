use eframe::egui;

use super::theme::{
    Theme,
    Tone,
};
use crate::core::{
    render::{
        select_panel,
        Panel,
    },
    ResponseView,
};

pub struct ResponsePanel;

impl ResponsePanel {
    pub fn show(ui: &mut egui::Ui, view: &ResponseView, theme: &Theme) {
        let panel = select_panel(view);
        let tone = match &panel {
            Panel::Empty => return,
            Panel::Loading => Tone::Info,
            Panel::Error(_) => Tone::Error,
            Panel::Prediction(_) | Panel::Success { .. } => Tone::Success,
            Panel::Raw { is_error: true, .. } => Tone::Error,
            Panel::Raw { is_error: false, .. } => Tone::Neutral,
        };
        let colors = theme.panel(ui.ctx(), tone);

        ui.add_space(16.0);
        egui::Frame::new()
            .fill(colors.fill)
            .stroke(egui::Stroke::new(1.0, colors.stroke))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.style_mut().visuals.override_text_color = Some(colors.text);

                match panel {
                    Panel::Empty => {}
                    Panel::Loading => {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label("Processing...");
                        });
                    }
                    Panel::Error(payload) => {
                        ui.strong(format!("Error (Status: {})", payload.status_code));
                        labeled(ui, "Type:", &payload.error_type);
                        labeled(ui, "Message:", &payload.message);
                    }
                    Panel::Prediction(prediction) => {
                        ui.strong(&prediction.message);
                        ui.label(&prediction.predicted_yield);
                    }
                    Panel::Success { message } => {
                        ui.strong("Operation Successful");
                        ui.label(message);
                    }
                    Panel::Raw { text, .. } => {
                        ui.add(
                            egui::TextEdit::multiline(&mut text.as_str())
                                .desired_width(f32::INFINITY)
                                .code_editor(),
                        );
                    }
                }
            });
    }
}

fn labeled(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.strong(label);
        ui.label(value);
    });
}
