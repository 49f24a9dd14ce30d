//! Speak request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Maximum narration length in characters
const MAX_TEXT_LEN: usize = 5000;

/// Request for standalone speech synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakRequest {
    /// Text to narrate
    #[serde(default)]
    pub text: Option<String>,

    /// Voice override
    #[serde(default)]
    pub voice: Option<String>,
}

impl SpeakRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let text = self.text.as_deref().unwrap_or("");
        if text.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "text is required".to_string(),
            });
        }
        if text.len() > MAX_TEXT_LEN {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: format!("text exceeds maximum length of {} characters", MAX_TEXT_LEN),
            });
        }
        Ok(())
    }
}
