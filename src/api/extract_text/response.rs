//! Extract-text response types

use serde::{Deserialize, Serialize};

/// Substitute message narrated and displayed when OCR finds nothing.
pub const NO_TEXT_DETECTED: &str = "No text detected in the image.";

/// Response from local text extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextResponse {
    /// Extracted text, or the substitute message when nothing was found
    pub text: String,
    /// Whether any text was recognized
    pub text_found: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Base64-encoded MP3 narration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// MIME type of the narration audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_mime: Option<String>,
}

impl ExtractTextResponse {
    /// Build a response from raw OCR output, substituting the fixed
    /// message when the engine recognized nothing.
    pub fn from_ocr_text(extracted: String, processing_time_ms: u64) -> Self {
        let text_found = !extracted.is_empty();
        Self {
            text: if text_found {
                extracted
            } else {
                NO_TEXT_DETECTED.to_string()
            },
            text_found,
            processing_time_ms,
            audio: None,
            audio_mime: None,
        }
    }
}
