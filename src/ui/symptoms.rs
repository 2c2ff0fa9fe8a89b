// src/ui/symptoms.rs
use eframe::egui;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::form::append_to_list;
use crate::state::AppState;
use crate::ui::page::show_page;

const SYMPTOM_FIELD: &str = "symptoms";

pub fn show_symptoms_view(ui: &mut egui::Ui, state: &mut AppState, client: &ApiClient, runtime: &Handle) {
    let AppState { symptoms, symptom_catalog, .. } = state;
    let known = symptom_catalog.result().map(Vec::as_slice).unwrap_or(&[]);

    show_page(ui, symptoms, client, runtime, |ui, page| {
        if known.is_empty() {
            return;
        }

        ui.add_space(4.0);
        ui.collapsing("Known symptoms", |ui| {
            egui::ScrollArea::vertical()
                .id_source("known_symptoms_scroll")
                .max_height(140.0)
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for symptom in known {
                            if ui.small_button(symptom.replace('_', " ")).clicked() {
                                let mut raw = page.form().get(SYMPTOM_FIELD).to_string();
                                append_to_list(&mut raw, symptom);
                                page.on_field_change(SYMPTOM_FIELD, raw);
                            }
                        }
                    });
                });
        });
    });
}
