// src/api/client.rs
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::error::RequestError;
use crate::config::Settings;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const SYMPTOM_CATALOG_PATH: &str = "/api/symptoms";

/// Thin JSON-over-HTTP client for the prediction backend.
///
/// One attempt per call: no retry, no backoff. A timeout only applies when
/// configured. Every call races the given cancellation token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self, RequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RequestError::Build)?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post<P, R>(
        &self,
        path: &str,
        payload: &P,
        request_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<R, RequestError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(payload);
        self.execute(request, cancel).await
    }

    pub async fn get<R>(
        &self,
        path: &str,
        request_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string());
        self.execute(request, cancel).await
    }

    pub async fn list_symptoms(
        &self,
        request_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, RequestError> {
        self.get(SYMPTOM_CATALOG_PATH, request_id, cancel).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<R, RequestError> {
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(RequestError::Status(status));
            }
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RequestError::Cancelled),
            result = exchange => result,
        }
    }
}
