//! Vitals Upstream - client for the upstream clinical data API
//!
//! Fetches paged patient records and submits assessment results. Transport
//! concerns live here: API-key headers, timeouts, retry with backoff on rate
//! limits and server errors, and flattening pagination into one finite batch
//! for the scoring core.
//!
//! # Usage
//!
//! ```no_run
//! use vitals_upstream::{ApiClient, PatientSource, UpstreamConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = ApiClient::new(
//!     UpstreamConfig::new("https://api.example.com").with_api_key("your-api-key"),
//! )?;
//!
//! let batch = client.fetch_all().await?;
//! println!("fetched {} records", batch.records.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod retry;
pub mod traits;

pub use api::ApiClient;
pub use config::UpstreamConfig;
pub use error::{UpstreamError, UpstreamResult};
pub use models::{
    CategoryBreakdown, PatientBatch, PatientsPage, Pagination, ResponseMetadata, ScoreBreakdown,
    SubmissionFeedback, SubmissionOutcome, SubmissionPayload, SubmissionResponse,
};
pub use retry::{RetryDecision, RetryPolicy};
pub use traits::{AssessmentSubmitter, PatientSource};
