//! HTTP client for the upstream clinical API
//!
//! # Endpoints
//!
//! ## GET /patients?page={page}&limit={limit}
//!
//! Returns one page of raw patient records:
//!
//! ```json
//! {
//!   "data": [{ "patient_id": "DEMO001", "name": "...", "age": 45, "blood_pressure": "120/80", ... }],
//!   "pagination": { "page": 1, "limit": 20, "total": 50, "totalPages": 3, "hasNext": true, "hasPrevious": false },
//!   "metadata": { "timestamp": "...", "version": "v1.0", "requestId": "..." }
//! }
//! ```
//!
//! ## POST /submit-assessment
//!
//! Accepts a [`SubmissionPayload`] and returns a [`SubmissionResponse`].
//!
//! # Authentication
//!
//! When an API key is configured it is sent on every request:
//!
//! ```text
//! x-api-key: {api_key}
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use vitals_core::AssessmentResults;

use crate::config::UpstreamConfig;
use crate::error::{UpstreamError, UpstreamResult};
use crate::models::{PatientsPage, SubmissionPayload, SubmissionResponse};
use crate::retry::{RetryDecision, RetryPolicy};
use crate::traits::{AssessmentSubmitter, PatientSource};

/// Upstream API client
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryPolicy,
    page_limit: u32,
    max_pages: u32,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: UpstreamConfig) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            retry: config.retry,
            page_limit: config.page_limit,
            max_pages: config.max_pages,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match self.api_key {
            Some(ref key) => request.header("x-api-key", key),
            None => request,
        }
    }

    /// Send a request, retrying per the configured policy.
    ///
    /// `build` is called once per attempt since a sent request cannot be reused.
    async fn send_with_retry<F>(&self, build: F) -> UpstreamResult<Response>
    where
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        for attempt in 0..self.retry.max_attempts {
            let decision = match self.with_headers(build()).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    match self.retry.on_status(status, attempt) {
                        RetryDecision::Accept => return Ok(response),
                        RetryDecision::Fail => return Err(UpstreamError::ServerError { status }),
                        decision => {
                            warn!(status, attempt, "Upstream request not accepted");
                            decision
                        }
                    }
                }
                Err(err) => match self.retry.on_transport_error(attempt) {
                    RetryDecision::RetryAfter(delay) => {
                        warn!(attempt, error = %err, "Upstream request failed");
                        RetryDecision::RetryAfter(delay)
                    }
                    _ => return Err(UpstreamError::Transport(err)),
                },
            };

            match decision {
                RetryDecision::RetryAfter(delay) => tokio::time::sleep(delay).await,
                _ => break,
            }
        }

        Err(UpstreamError::RetriesExhausted {
            attempts: self.retry.max_attempts,
        })
    }

    /// Reject non-2xx responses and decode the body
    async fn decode<T: DeserializeOwned>(response: Response) -> UpstreamResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PatientSource for ApiClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> UpstreamResult<PatientsPage> {
        let url = self.url("/patients");
        debug!(page, limit, "Fetching patients from {}", url);

        let response = self
            .send_with_retry(|| {
                self.client
                    .get(&url)
                    .query(&[("page", page), ("limit", limit)])
            })
            .await?;

        Self::decode(response).await
    }

    fn page_limit(&self) -> u32 {
        self.page_limit
    }

    fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

#[async_trait]
impl AssessmentSubmitter for ApiClient {
    async fn submit(&self, results: &AssessmentResults) -> UpstreamResult<SubmissionResponse> {
        let url = self.url("/submit-assessment");
        let payload = SubmissionPayload::new(results.clone());
        info!(
            high_risk = results.high_risk_patients.len(),
            fever = results.fever_patients.len(),
            data_quality = results.data_quality_issues.len(),
            "Submitting assessment"
        );

        let response = self
            .send_with_retry(|| self.client.post(&url).json(&payload))
            .await?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = ApiClient::new(UpstreamConfig::new("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/patients"), "https://api.example.com/patients");
    }

    #[test]
    fn test_client_takes_paging_from_config() {
        let client = ApiClient::new(
            UpstreamConfig::new("http://localhost")
                .with_page_limit(5)
                .with_max_pages(3),
        )
        .unwrap();

        assert_eq!(client.page_limit(), 5);
        assert_eq!(client.max_pages(), 3);
    }
}
