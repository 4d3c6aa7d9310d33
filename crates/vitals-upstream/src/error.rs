//! Error types for the upstream client

use thiserror::Error;

/// Result type alias for upstream operations
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors that can occur talking to the upstream API
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Connection, timeout, or other transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream kept answering with a 5xx status
    #[error("Server error: {status}")]
    ServerError { status: u16 },

    /// Non-success status that is not retried
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Every attempt was rate limited
    #[error("Max retries exceeded after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// Response body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Errors that the caller may reasonably fall back from
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            UpstreamError::Transport(_)
                | UpstreamError::ServerError { .. }
                | UpstreamError::RetriesExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = UpstreamError::ServerError { status: 503 };
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn test_status_display() {
        let err = UpstreamError::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 404: Not Found");
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = UpstreamError::RetriesExhausted { attempts: 3 };
        assert!(err.to_string().contains("3 attempts"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: UpstreamError = serde_err.into();
        assert!(matches!(err, UpstreamError::Decode(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_is_unavailable() {
        assert!(UpstreamError::ServerError { status: 500 }.is_unavailable());
        assert!(UpstreamError::RetriesExhausted { attempts: 3 }.is_unavailable());
        assert!(!UpstreamError::Status {
            status: 400,
            message: String::new()
        }
        .is_unavailable());
    }
}
