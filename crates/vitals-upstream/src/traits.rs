//! Source and sink traits for upstream data
//!
//! - [`PatientSource`]: paged patient fetch, with pagination flattening provided
//! - [`AssessmentSubmitter`]: assessment submission
//!
//! The HTTP implementation is [`crate::ApiClient`]; the server also accepts any
//! other implementation, which is how it is tested without a network.

use async_trait::async_trait;
use tracing::{debug, warn};
use vitals_core::AssessmentResults;

use crate::error::UpstreamResult;
use crate::models::{PatientBatch, PatientsPage, SubmissionResponse};

#[async_trait]
pub trait PatientSource: Send + Sync {
    /// Fetch one page (1-based)
    async fn fetch_page(&self, page: u32, limit: u32) -> UpstreamResult<PatientsPage>;

    /// Page size used by [`PatientSource::fetch_all`]
    fn page_limit(&self) -> u32 {
        20
    }

    /// Page cap for [`PatientSource::fetch_all`]
    fn max_pages(&self) -> u32 {
        50
    }

    /// Fetch every page in order and flatten them into one batch.
    ///
    /// Walks forward while the upstream reports `hasNext`, stopping early at
    /// [`PatientSource::max_pages`].
    async fn fetch_all(&self) -> UpstreamResult<PatientBatch> {
        let limit = self.page_limit();
        let max_pages = self.max_pages().max(1);

        let mut page_number = 1;
        let mut records = Vec::new();

        loop {
            let page = self.fetch_page(page_number, limit).await?;
            debug!(
                page = page_number,
                count = page.data.len(),
                has_next = page.pagination.has_next,
                "Fetched patient page"
            );

            records.extend(page.data);
            let has_next = page.pagination.has_next;

            if !has_next || page_number >= max_pages {
                let truncated = has_next;
                if truncated {
                    warn!(
                        pages = page_number,
                        "Stopped fetching at page cap while upstream reports more pages"
                    );
                }
                return Ok(PatientBatch {
                    records,
                    metadata: page.metadata,
                    pages_fetched: page_number,
                    truncated,
                });
            }

            page_number += 1;
        }
    }
}

#[async_trait]
pub trait AssessmentSubmitter: Send + Sync {
    async fn submit(&self, results: &AssessmentResults) -> UpstreamResult<SubmissionResponse>;
}
