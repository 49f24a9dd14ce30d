//! Annotate response types

use serde::{Deserialize, Serialize};

use crate::vision::Annotation;

/// Response from the fixed-overlay annotator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResponse {
    /// Base64-encoded PNG with the overlay drawn
    pub image: String,
    /// The overlay regions (always the two fixed placeholders)
    pub regions: Vec<Annotation>,
    /// True: positions never derive from image content
    pub placeholder: bool,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
