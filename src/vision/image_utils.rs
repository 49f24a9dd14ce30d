//! Upload decoding and encoding helpers
//!
//! Uploads arrive as base64 JSON fields; only PNG and JPEG are accepted.
//! Every analysis path decodes through here first, so a corrupt upload is
//! rejected before any handler does real work.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

/// Maximum accepted upload size (10MB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image data is empty")]
    Empty,

    #[error("image is too large: {0} bytes (max: {MAX_UPLOAD_BYTES} bytes)")]
    TooLarge(usize),

    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("unsupported image format, expected jpg, jpeg or png")]
    UnsupportedFormat,

    #[error("failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("failed to encode image: {0}")]
    EncodeFailed(String),
}

/// Metadata captured while decoding an upload.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub size_bytes: usize,
}

/// Detect the upload format from magic bytes. Only the formats the upload
/// interface accepts are recognized.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, ImageError> {
    match bytes {
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),
        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),
        _ => Err(ImageError::UnsupportedFormat),
    }
}

/// Decode raw upload bytes into a bitmap plus metadata.
pub fn decode_upload(bytes: &[u8]) -> Result<(DynamicImage, ImageInfo), ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ImageError::TooLarge(bytes.len()));
    }

    let format = sniff_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let info = ImageInfo {
        width: image.width(),
        height: image.height(),
        format,
        size_bytes: bytes.len(),
    };

    Ok((image, info))
}

/// Decode a base64-encoded upload (the JSON transport form).
pub fn decode_base64_upload(base64_str: &str) -> Result<(DynamicImage, ImageInfo), ImageError> {
    if base64_str.is_empty() {
        return Err(ImageError::Empty);
    }
    let bytes = STANDARD.decode(base64_str)?;
    decode_upload(&bytes)
}

/// Re-encode a bitmap as PNG bytes (the portable form sent to the model
/// endpoint and returned by the annotator).
pub fn to_png_bytes(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Re-encode a bitmap as a base64 PNG string.
pub fn to_png_base64(image: &DynamicImage) -> Result<String, ImageError> {
    Ok(STANDARD.encode(to_png_bytes(image)?))
}
