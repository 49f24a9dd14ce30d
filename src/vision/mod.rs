//! Vision processing for the assistive analysis flow
//!
//! This module provides:
//! - Upload decoding and PNG re-encoding
//! - Remote multimodal analysis via a hosted model
//! - Local OCR via the Tesseract executable
//! - The fixed-overlay annotator (an acknowledged placeholder)

pub mod analysis;
pub mod annotator;
pub mod image_utils;
pub mod ocr;

pub use analysis::{AnalysisClient, AnalysisError, AnalysisReply, AnalysisTask};
pub use annotator::{annotate, Annotation, BoundingBox, PLACEHOLDER_REGIONS};
pub use image_utils::{
    decode_base64_upload, decode_upload, sniff_format, to_png_base64, to_png_bytes, ImageError,
    ImageInfo,
};
pub use ocr::{OcrError, TesseractOcr};
