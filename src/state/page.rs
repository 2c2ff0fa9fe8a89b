// src/state/page.rs
use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::config::FormSchema;
use crate::form::{FormState, ValidationError};
use crate::state::submission::{Phase, Submission};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Started(Uuid),
    Invalid(ValidationError),
    AlreadyInFlight,
}

/// One form page: its form, its submission and the schema tying them to an endpoint.
#[derive(Debug)]
pub struct PageController<R> {
    schema: &'static FormSchema,
    form: FormState,
    submission: Submission<R>,
}

impl<R> PageController<R>
where
    R: DeserializeOwned + Send + 'static,
{
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            form: FormState::for_schema(schema),
            submission: Submission::new(schema.failure_message),
        }
    }

    /// Stores the raw value as typed; checking it waits for submit.
    pub fn on_field_change(&mut self, name: &str, value: impl Into<String>) {
        if self.schema.field(name).is_none() {
            warn!(endpoint = self.schema.endpoint, field = name, "ignoring change to unknown field");
            return;
        }
        self.form.set(name, value);
    }

    pub fn on_submit(&mut self, client: &ApiClient, runtime: &Handle) -> SubmitOutcome {
        if self.submission.is_loading() {
            debug!(endpoint = self.schema.endpoint, "submit ignored while loading");
            return SubmitOutcome::AlreadyInFlight;
        }

        if let Err(err) = self.form.validate(self.schema) {
            debug!(endpoint = self.schema.endpoint, %err, "form rejected before sending");
            self.submission.fail(err.to_string());
            return SubmitOutcome::Invalid(err);
        }

        let payload = self.form.to_payload(self.schema);
        let endpoint = self.schema.endpoint;
        let client = client.clone();
        let started = self.submission.begin(runtime, endpoint, move |request_id, cancel| async move {
            client
                .post::<Value, R>(endpoint, &payload, request_id, &cancel)
                .await
        });

        match started {
            Some(request_id) => SubmitOutcome::Started(request_id),
            None => SubmitOutcome::AlreadyInFlight,
        }
    }

    pub fn poll(&mut self) -> bool {
        self.submission.poll()
    }

    /// Drops the form and abandons any pending request, as when leaving the page.
    pub fn reset(&mut self) {
        self.submission.reset();
        self.form = FormState::for_schema(self.schema);
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> &Phase<R> {
        self.submission.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn result(&self) -> Option<&R> {
        self.submission.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.submission.completed_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::{client_for, spawn_backend};
    use crate::api::{AnalysisResult, PredictionResult};
    use crate::config::{HEART_FORM, SYMPTOMS_FORM};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn wait_until_idle<R>(page: &mut PageController<R>)
    where
        R: DeserializeOwned + Send + 'static,
    {
        for _ in 0..400 {
            page.poll();
            if !page.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("request did not settle in time");
    }

    fn fill_heart_form(page: &mut PageController<PredictionResult>) {
        for field in HEART_FORM.fields {
            page.on_field_change(field.name, "1");
        }
        page.on_field_change("sex", "Female");
    }

    /// Backend whose every route answers with `response` and counts hits.
    fn counting_backend(runtime: &Runtime, path: &str, status: StatusCode, response: Value) -> (ApiClient, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            path,
            post(move || {
                let counter = counter.clone();
                let response = response.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, Json(response))
                }
            }),
        );
        let base_url = runtime.block_on(spawn_backend(router));
        (client_for(&base_url), hits)
    }

    #[test]
    fn test_blank_symptoms_never_reach_network() {
        let runtime = Runtime::new().unwrap();
        let (client, hits) = counting_backend(&runtime, "/api/analyze", StatusCode::OK, json!({}));
        let mut page = PageController::<AnalysisResult>::new(&SYMPTOMS_FORM);

        for raw in ["", "   \t ", " , "] {
            page.on_field_change("symptoms", raw);
            let outcome = page.on_submit(&client, runtime.handle());

            assert_eq!(
                outcome,
                SubmitOutcome::Invalid(ValidationError::Required("Please enter at least one symptom"))
            );
            assert_eq!(page.error(), Some("Please enter at least one symptom"));
            assert!(!page.is_loading());
        }

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_heart_success_stores_result() {
        let runtime = Runtime::new().unwrap();
        let (client, hits) = counting_backend(
            &runtime,
            "/api/heart",
            StatusCode::OK,
            json!({ "prediction_text": "Low Risk", "color": "#00FF00" }),
        );
        let mut page = PageController::<PredictionResult>::new(&HEART_FORM);
        fill_heart_form(&mut page);

        let outcome = page.on_submit(&client, runtime.handle());
        assert!(matches!(outcome, SubmitOutcome::Started(_)));
        assert!(page.is_loading());
        assert_eq!(page.phase(), &Phase::Loading);

        wait_until_idle(&mut page);
        assert_eq!(
            page.result(),
            Some(&PredictionResult {
                prediction_text: "Low Risk".to_string(),
                color: "#00FF00".to_string(),
            })
        );
        assert!(page.error().is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_success_status_shows_generic_message() {
        let runtime = Runtime::new().unwrap();
        let (client, _) = counting_backend(
            &runtime,
            "/api/heart",
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": "bad thal value" }),
        );
        let mut page = PageController::<PredictionResult>::new(&HEART_FORM);
        fill_heart_form(&mut page);

        page.on_submit(&client, runtime.handle());
        wait_until_idle(&mut page);

        assert_eq!(page.error(), Some("Failed to analyze heart condition. Please try again."));
        assert!(page.result().is_none());
    }

    #[test]
    fn test_malformed_symptom_response_clears_stale_result() {
        let runtime = Runtime::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let router = Router::new().route(
            "/api/analyze",
            post(move || {
                let counter = counter.clone();
                async move {
                    // First answer is valid, the second is missing fields
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Json(json!({ "severity": "low", "analysis": "Mild cold", "recommendations": ["Rest"] }))
                    } else {
                        Json(json!({ "disease": "Common cold" }))
                    }
                }
            }),
        );
        let client = client_for(&runtime.block_on(spawn_backend(router)));
        let mut page = PageController::<AnalysisResult>::new(&SYMPTOMS_FORM);
        page.on_field_change("symptoms", "cough, runny_nose");

        page.on_submit(&client, runtime.handle());
        wait_until_idle(&mut page);
        assert_eq!(page.result().map(|r| r.severity.as_str()), Some("low"));

        page.on_submit(&client, runtime.handle());
        wait_until_idle(&mut page);
        assert!(page.result().is_none());
        assert_eq!(page.error(), Some("Failed to analyze symptoms. Please try again."));
    }

    #[test]
    fn test_double_submit_sends_one_request() {
        let runtime = Runtime::new().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/api/heart",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Json(json!({ "prediction_text": "High Risk", "color": "red" }))
                }
            }),
        );
        let client = client_for(&runtime.block_on(spawn_backend(router)));
        let mut page = PageController::<PredictionResult>::new(&HEART_FORM);
        fill_heart_form(&mut page);

        assert!(matches!(page.on_submit(&client, runtime.handle()), SubmitOutcome::Started(_)));
        assert_eq!(page.on_submit(&client, runtime.handle()), SubmitOutcome::AlreadyInFlight);

        wait_until_idle(&mut page);
        assert_eq!(page.result().map(|r| r.color.as_str()), Some("red"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_field_ignored() {
        let mut page = PageController::<PredictionResult>::new(&HEART_FORM);
        page.on_field_change("Glucose", "140");
        page.on_field_change("age", "61");

        assert_eq!(page.form().get("Glucose"), "");
        assert_eq!(page.form().get("age"), "61");
    }

    #[test]
    fn test_reset_discards_form_and_request() {
        let runtime = Runtime::new().unwrap();
        let router = Router::new().route(
            "/api/heart",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Json(json!({ "prediction_text": "late", "color": "red" }))
            }),
        );
        let client = client_for(&runtime.block_on(spawn_backend(router)));
        let mut page = PageController::<PredictionResult>::new(&HEART_FORM);
        fill_heart_form(&mut page);

        page.on_submit(&client, runtime.handle());
        page.reset();

        assert!(!page.is_loading());
        assert_eq!(page.phase(), &Phase::Idle);
        assert_eq!(page.form(), &FormState::for_schema(&HEART_FORM));
        assert!(!page.poll());
    }
}
