//! Request body extraction
//!
//! Bodies are decoded as JSON and then checked with [`RequestBody::validate`];
//! both failures surface as [`ServerError::InvalidRequest`].

use crate::error::ServerError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use vitals_core::AssessmentResults;

/// A JSON request body with checks beyond what deserialization enforces
pub trait RequestBody: DeserializeOwned {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl RequestBody for AssessmentResults {
    /// Every submitted id must be non-blank
    fn validate(&self) -> Result<(), String> {
        let lists = [
            ("high_risk_patients", &self.high_risk_patients),
            ("fever_patients", &self.fever_patients),
            ("data_quality_issues", &self.data_quality_issues),
        ];

        for (field, ids) in lists {
            if let Some(index) = ids.iter().position(|id| id.trim().is_empty()) {
                return Err(format!("{}[{}] is a blank patient id", field, index));
            }
        }

        Ok(())
    }
}

/// Decoded and validated JSON body
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: RequestBody,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        body.validate().map_err(ServerError::InvalidRequest)?;

        Ok(Self(body))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ServerError {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => {
            format!("Body does not match the expected shape: {}", err.body_text())
        }
        JsonRejection::JsonSyntaxError(err) => format!("Body is not valid JSON: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Expected 'Content-Type: application/json'".to_string()
        }
        other => format!("Unreadable request body: {}", other.body_text()),
    };

    ServerError::InvalidRequest(message)
}
