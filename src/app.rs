// src/app.rs
use eframe::egui;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::state::{AppState, Screen};
use crate::ui::page::show_page;
use crate::ui::symptoms::show_symptoms_view;

// While a request is pending, wake up often enough to show its result promptly
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct HealthApp {
    state: AppState,
    client: ApiClient,
    runtime: Handle,
}

impl HealthApp {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        let mut state = AppState::new();
        state.load_symptom_catalog(&client, &runtime);
        Self {
            state,
            client,
            runtime,
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.strong("Health Predict");
            ui.separator();

            // Tab selection using buttons
            for screen in Screen::ALL {
                if ui
                    .selectable_label(self.state.current_screen == screen, screen.label())
                    .clicked()
                {
                    self.state.navigate(screen);
                }
            }
        });
    }
}

impl eframe::App for HealthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let state = &mut self.state;
                match state.current_screen {
                    Screen::Symptoms => {
                        show_symptoms_view(ui, state, &self.client, &self.runtime);
                    }
                    Screen::Pregnancy => {
                        show_page(ui, &mut state.pregnancy, &self.client, &self.runtime, |_, _| {});
                    }
                    Screen::Heart => {
                        show_page(ui, &mut state.heart, &self.client, &self.runtime, |_, _| {});
                    }
                    Screen::Diabetes => {
                        show_page(ui, &mut state.diabetes, &self.client, &self.runtime, |_, _| {});
                    }
                }
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }

        if self.state.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
