//! Analyze request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::vision::image_utils::MAX_UPLOAD_BYTES;
use crate::vision::AnalysisTask;

/// Supported upload formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg"];

/// Transport cap: the base64 encoding of a maximum-size upload
const MAX_IMAGE_BASE64_LEN: usize = MAX_UPLOAD_BYTES / 3 * 4 + 4;

fn default_format() -> String {
    "png".to_string()
}

fn default_speak() -> bool {
    true
}

/// Request for remote analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Base64-encoded image data
    #[serde(default)]
    pub image: Option<String>,

    /// Upload format hint (png, jpg, jpeg)
    #[serde(default = "default_format")]
    pub format: String,

    /// Analysis task: scene, obstacles, assistance
    #[serde(default)]
    pub task: Option<String>,

    /// Narrate the result as MP3 audio
    #[serde(default = "default_speak")]
    pub speak: bool,
}

impl AnalyzeRequest {
    /// Validate the request and resolve the task.
    pub fn validate(&self) -> Result<AnalysisTask, ApiError> {
        if self.image.as_ref().map(|s| s.is_empty()).unwrap_or(true) {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: "image is required".to_string(),
            });
        }

        if let Some(ref image) = self.image {
            if image.len() > MAX_IMAGE_BASE64_LEN {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: format!(
                        "base64 image data exceeds maximum length of {} bytes",
                        MAX_IMAGE_BASE64_LEN
                    ),
                });
            }
        }

        if !SUPPORTED_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ApiError::ValidationError {
                field: "format".to_string(),
                message: format!(
                    "unsupported format '{}', supported: {:?}",
                    self.format, SUPPORTED_FORMATS
                ),
            });
        }

        let task = self.task.as_deref().ok_or_else(|| ApiError::ValidationError {
            field: "task".to_string(),
            message: "task is required".to_string(),
        })?;
        AnalysisTask::parse(task).ok_or_else(|| ApiError::ValidationError {
            field: "task".to_string(),
            message: format!(
                "unknown task '{}', supported: scene, obstacles, assistance",
                task
            ),
        })
    }
}
