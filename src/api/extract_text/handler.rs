//! Extract-text endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::request::ExtractTextRequest;
use super::response::ExtractTextResponse;
use crate::api::http_server::AppState;
use crate::api::narration::narrate;
use crate::vision::decode_base64_upload;

/// POST /v1/extract-text - Run local OCR over an uploaded image
///
/// Returns the recognized text, or the fixed substitute message when the
/// image contains no recognizable glyphs; either way the returned text is
/// what gets narrated.
///
/// # Errors
/// - 400 Bad Request: validation or image decode failure
/// - 500 Internal Server Error: OCR engine missing or failed
/// - 502 Bad Gateway: narration synthesis failed
pub async fn extract_text_handler(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractTextResponse>, (StatusCode, String)> {
    request.validate().map_err(|e| {
        warn!("extract-text validation failed: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let image_data = request
        .image
        .as_ref()
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "image is required".to_string()))?;

    let (image, info) = decode_base64_upload(image_data).map_err(|e| {
        warn!("failed to decode upload: {}", e);
        (StatusCode::BAD_REQUEST, format!("Invalid image: {}", e))
    })?;
    debug!("decoded upload: {}x{}", info.width, info.height);

    let start = Instant::now();
    let extracted = state.ocr.extract(&image).await.map_err(|e| {
        warn!("OCR failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("OCR failed: {}", e),
        )
    })?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    info!(
        "OCR complete: {} chars, {}ms",
        extracted.len(),
        elapsed_ms
    );

    let mut response = ExtractTextResponse::from_ocr_text(extracted, elapsed_ms);
    let (audio, audio_mime) = narrate(&state, &response.text, request.speak).await?;
    response.audio = audio;
    response.audio_mime = audio_mime;

    Ok(Json(response))
}
