//! Analyze response types

use serde::{Deserialize, Serialize};

/// Response from a remote analysis task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Model reply text
    pub text: String,
    /// Task that produced the reply
    pub task: String,
    /// Model used
    pub model: String,
    /// Processing time in milliseconds (remote call only)
    pub processing_time_ms: u64,
    /// Total tokens reported by the model endpoint
    pub tokens_used: u32,
    /// Base64-encoded MP3 narration of the reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// MIME type of the narration audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_mime: Option<String>,
}
