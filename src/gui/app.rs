use eframe::egui;

use super::{
    form::{
        CropForm,
        FormAction,
    },
    response_panel::ResponsePanel,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    config::AppConfig,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        AgriError,
        ApiClient,
        FormController,
    },
};

pub struct AgriApp {
    config: AppConfig,
    controller: FormController,
    theme: Theme,
    task_manager: TaskManager,
}

impl AgriApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, AgriError> {
        let client = ApiClient::from_config(&config)?;
        let mut task_manager = TaskManager::new(client)?;

        let ctx = cc.egui_ctx.clone();
        task_manager.set_notifier(move || ctx.request_repaint());

        let app = Self {
            controller: FormController::new(config.default_crop),
            theme: Theme::field(),
            task_manager,
            config,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_theme(if app.config.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Ok(app)
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        tracing::debug!(task = result.task_type(), "Task finished");
        self.controller.complete(result.into_completion());
    }

    fn handle_action(&mut self, action: FormAction) {
        match action {
            FormAction::Analyze => {
                if let Some(data) = self.controller.begin_analyze() {
                    self.task_manager.analyze(data);
                }
            }
            FormAction::Retrain => {
                self.controller.begin_retrain();
                self.task_manager.retrain();
            }
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.config.dark_mode = !self.config.dark_mode;
        ctx.set_theme(if self.config.dark_mode { egui::Theme::Dark } else { egui::Theme::Light });

        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for AgriApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.label(self.theme.muted(ctx, "Agri-AI Yield Predictor"));
                ui.label(self.theme.muted(ctx, &format!("Service: {}", self.config.api_base_url)));
                ui.add_space(4.0);
            });
        });

        let mut action = None;
        let mut toggle_theme = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let icon = if self.config.dark_mode { "☀" } else { "🌙" };
                toggle_theme = ui.button(icon).on_hover_text("Toggle theme").clicked();
            });

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(self.theme.title(ctx, "Agri-AI Yield Predictor"));
                });
                ui.add_space(20.0);

                let is_loading = self.controller.is_loading();
                action = CropForm::show(ui, &mut self.controller.fields, is_loading, &self.theme);

                ResponsePanel::show(ui, self.controller.view(), &self.theme);
            });
        });

        if let Some(action) = action {
            self.handle_action(action);
        }

        if toggle_theme {
            self.toggle_dark_mode(ctx);
        }
    }
}
