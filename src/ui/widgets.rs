// src/ui/widgets.rs
use eframe::egui;

use crate::config::{FieldKind, FieldSpec};
use crate::form::FormState;
use crate::render::{Badge, BadgeFill, RenderedResult, Section, Tone};

const FIELD_WIDTH: f32 = 260.0;

pub fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Success => egui::Color32::from_rgb(23, 201, 100),
        Tone::Warning => egui::Color32::from_rgb(245, 165, 36),
        Tone::Danger => egui::Color32::from_rgb(243, 18, 96),
        Tone::Neutral => egui::Color32::from_rgb(113, 113, 122),
    }
}

pub fn fill_color(fill: &BadgeFill) -> egui::Color32 {
    match fill {
        BadgeFill::Tone(tone) => tone_color(*tone),
        BadgeFill::Color(rgba) => egui::Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a),
    }
}

pub fn show_badge(ui: &mut egui::Ui, badge: &Badge) {
    egui::Frame::none()
        .fill(fill_color(&badge.fill))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(14.0, 6.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&badge.text)
                    .color(egui::Color32::WHITE)
                    .size(18.0)
                    .strong(),
            );
        });
}

pub fn show_rendered(ui: &mut egui::Ui, rendered: &RenderedResult) {
    ui.strong(rendered.badge_heading);
    ui.add_space(4.0);
    show_badge(ui, &rendered.badge);

    for section in &rendered.sections {
        ui.add_space(12.0);
        match section {
            Section::Text { heading, body } => {
                ui.strong(*heading);
                ui.add_space(4.0);
                ui.label(body);
            }
            Section::List { heading, items } => {
                ui.strong(*heading);
                ui.add_space(4.0);
                for item in items {
                    ui.label(format!("• {}", item));
                }
            }
        }
    }
}

/// One labelled input. Returns the new value when the user changed it.
pub fn field_input(ui: &mut egui::Ui, field: &FieldSpec, form: &FormState) -> Option<String> {
    ui.label(field.label);
    let mut value = form.get(field.name).to_string();

    let changed = match field.kind {
        FieldKind::Number => ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .desired_width(FIELD_WIDTH)
                    .hint_text("Enter a number"),
            )
            .changed(),
        FieldKind::Choice(options) => {
            let selected = if value.is_empty() { "Select...".to_string() } else { value.clone() };
            let mut picked = false;
            egui::ComboBox::from_id_source(field.name)
                .selected_text(selected)
                .width(FIELD_WIDTH)
                .show_ui(ui, |ui| {
                    for option in options {
                        picked |= ui.selectable_value(&mut value, option.to_string(), *option).changed();
                    }
                });
            picked
        }
        FieldKind::List => ui
            .add(
                egui::TextEdit::multiline(&mut value)
                    .desired_width(f32::INFINITY)
                    .desired_rows(3)
                    .hint_text("Enter your symptoms separated by commas (e.g., fever, cough, headache)"),
            )
            .changed(),
    };

    changed.then_some(value)
}
