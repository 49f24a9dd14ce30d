use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    ValidationError { field: String, message: String },
    ServiceUnavailable(String),
    UpstreamError(String),
    RateLimited,
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::InvalidRequest(msg) => ("invalid_request", msg.clone(), None),
            ApiError::ValidationError { field, message } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                ("validation_error", message.clone(), Some(details))
            }
            ApiError::ServiceUnavailable(msg) => ("service_unavailable", msg.clone(), None),
            ApiError::UpstreamError(msg) => ("upstream_error", msg.clone(), None),
            ApiError::RateLimited => (
                "rate_limit_exceeded",
                "Upstream rate limit exceeded".to_string(),
                None,
            ),
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::ValidationError { .. } => 400,
            ApiError::ServiceUnavailable(_) => 503,
            ApiError::UpstreamError(_) => 502,
            ApiError::RateLimited => 429,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ApiError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::RateLimited => write!(f, "Upstream rate limit exceeded"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
