// src/render/mod.rs
use tracing::warn;

use crate::api::{AnalysisResult, PredictionResult};

pub mod color;

pub use color::{parse_color, Rgba};

/// Semantic badge colors, resolved to real colors by the UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeFill {
    Tone(Tone),
    Color(Rgba),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    pub fill: BadgeFill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text { heading: &'static str, body: String },
    List { heading: &'static str, items: Vec<String> },
}

/// Everything the results card needs, with no UI types involved.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub badge_heading: &'static str,
    pub badge: Badge,
    pub sections: Vec<Section>,
}

pub trait ResultView {
    fn render(&self) -> RenderedResult;
}

pub fn severity_tone(severity: &str) -> Tone {
    match severity {
        "low" => Tone::Success,
        "medium" => Tone::Warning,
        "high" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

/// Backend colors only get through if they parse; otherwise the badge goes neutral.
pub fn backend_fill(raw: &str) -> BadgeFill {
    match parse_color(raw) {
        Some(rgba) => BadgeFill::Color(rgba),
        None => {
            warn!(color = raw, "backend sent an unusable color, falling back to neutral");
            BadgeFill::Tone(Tone::Neutral)
        }
    }
}

impl ResultView for AnalysisResult {
    fn render(&self) -> RenderedResult {
        RenderedResult {
            badge_heading: "Severity Level",
            badge: Badge {
                text: self.severity.to_uppercase(),
                fill: BadgeFill::Tone(severity_tone(&self.severity)),
            },
            sections: vec![
                Section::Text {
                    heading: "Analysis",
                    body: self.analysis.clone(),
                },
                Section::List {
                    heading: "Recommendations",
                    items: self.recommendations.clone(),
                },
            ],
        }
    }
}

impl ResultView for PredictionResult {
    fn render(&self) -> RenderedResult {
        RenderedResult {
            badge_heading: "Prediction",
            badge: Badge {
                text: self.prediction_text.clone(),
                fill: backend_fill(&self.color),
            },
            sections: Vec::new(),
        }
    }
}
