//! REST API implementation
//!
//! - types: application state and request/response types
//! - extractors: JSON body extractor with readable rejections
//! - handlers: endpoint handlers
//! - router: route table and middleware

mod extractors;
mod handlers;
mod router;
pub mod types;

pub use extractors::{JsonExtractor, RequestBody};
pub use router::create_router;
pub use types::{AppState, AssessmentResponse, HealthResponse, PageParams};
