// src/ui/page.rs
use eframe::egui;
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::render::ResultView;
use crate::state::page::PageController;
use crate::ui::widgets::{field_input, show_rendered};

/// Input card on the left, results card on the right.
///
/// `extra_inputs` draws below the fields and may change them through the
/// controller, which is how the symptoms page offers its suggestions.
pub fn show_page<R>(
    ui: &mut egui::Ui,
    page: &mut PageController<R>,
    client: &ApiClient,
    runtime: &Handle,
    extra_inputs: impl FnOnce(&mut egui::Ui, &mut PageController<R>),
) where
    R: ResultView + DeserializeOwned + Send + 'static,
{
    let schema = page.schema();

    ui.vertical_centered(|ui| {
        ui.heading(schema.title);
    });
    ui.add_space(16.0);

    ui.columns(2, |columns| {
        // Input Section
        columns[0].group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Enter Your Details");
            ui.add_space(8.0);

            for field in schema.fields {
                if let Some(value) = field_input(ui, field, page.form()) {
                    page.on_field_change(field.name, value);
                }
                ui.add_space(4.0);
            }
            extra_inputs(ui, page);

            if let Some(error) = page.error() {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(8.0);
            let loading = page.is_loading();
            ui.horizontal(|ui| {
                // Disabled while loading so a second submit cannot start
                let button = egui::Button::new(schema.submit_label).min_size(egui::vec2(200.0, 32.0));
                if ui.add_enabled(!loading, button).clicked() {
                    page.on_submit(client, runtime);
                }
                if loading {
                    ui.add(egui::Spinner::new());
                }
            });
        });

        // Results Section
        columns[1].group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Analysis Results");
            ui.add_space(8.0);

            match page.result() {
                Some(result) => {
                    show_rendered(ui, &result.render());
                    if let Some(completed_at) = page.completed_at() {
                        ui.add_space(12.0);
                        ui.small(format!("Last analysis: {}", completed_at.format("%Y-%m-%d %H:%M:%S")));
                    }
                }
                None if page.is_loading() => {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label("Analyzing...");
                    });
                }
                None => {
                    ui.label(egui::RichText::new(schema.placeholder).weak());
                }
            }
        });
    });
}
