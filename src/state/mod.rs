// src/state/mod.rs
use tokio::runtime::Handle;

use crate::api::client::SYMPTOM_CATALOG_PATH;
use crate::api::{AnalysisResult, ApiClient, PredictionResult};
use crate::config::{DIABETES_FORM, HEART_FORM, PREGNANCY_FORM, SYMPTOMS_FORM};
use crate::state::page::PageController;
use crate::state::submission::Submission;

pub mod page;
pub mod submission;

const CATALOG_FAILURE: &str = "Could not load the list of known symptoms. You can still type symptoms by hand.";

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Symptoms,
    Pregnancy,
    Heart,
    Diabetes,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Symptoms, Screen::Pregnancy, Screen::Heart, Screen::Diabetes];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Symptoms => "Symptoms",
            Screen::Pregnancy => "Pregnancy",
            Screen::Heart => "Heart",
            Screen::Diabetes => "Diabetes",
        }
    }
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub current_screen: Screen,

    // One controller per page
    pub symptoms: PageController<AnalysisResult>,
    pub pregnancy: PageController<PredictionResult>,
    pub heart: PageController<PredictionResult>,
    pub diabetes: PageController<PredictionResult>,

    pub symptom_catalog: Submission<Vec<String>>,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Symptoms,
            symptoms: PageController::new(&SYMPTOMS_FORM),
            pregnancy: PageController::new(&PREGNANCY_FORM),
            heart: PageController::new(&HEART_FORM),
            diabetes: PageController::new(&DIABETES_FORM),
            symptom_catalog: Submission::new(CATALOG_FAILURE),
            error_message: None,
        }
    }

    /// Switches pages. The page being left loses its form and any pending request.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == self.current_screen {
            return;
        }
        match self.current_screen {
            Screen::Symptoms => self.symptoms.reset(),
            Screen::Pregnancy => self.pregnancy.reset(),
            Screen::Heart => self.heart.reset(),
            Screen::Diabetes => self.diabetes.reset(),
        }
        self.current_screen = screen;
    }

    pub fn load_symptom_catalog(&mut self, client: &ApiClient, runtime: &Handle) {
        let client = client.clone();
        self.symptom_catalog.begin(runtime, SYMPTOM_CATALOG_PATH, move |request_id, cancel| async move {
            client.list_symptoms(request_id, &cancel).await
        });
    }

    /// Collects settled requests from every page. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        changed |= self.symptoms.poll();
        changed |= self.pregnancy.poll();
        changed |= self.heart.poll();
        changed |= self.diabetes.poll();

        if self.symptom_catalog.poll() {
            changed = true;
            if let Some(message) = self.symptom_catalog.error() {
                self.error_message = Some(message.to_string());
            }
        }
        changed
    }

    pub fn is_loading(&self) -> bool {
        self.symptoms.is_loading()
            || self.pregnancy.is_loading()
            || self.heart.is_loading()
            || self.diabetes.is_loading()
            || self.symptom_catalog.is_loading()
    }
}
