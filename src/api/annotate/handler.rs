//! Annotate endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use std::time::Instant;
use tracing::{debug, warn};

use super::request::AnnotateRequest;
use super::response::AnnotateResponse;
use crate::api::http_server::AppState;
use crate::vision::{annotate, decode_base64_upload, to_png_base64};

/// POST /v1/annotate - Draw the fixed placeholder overlay
///
/// Returns a PNG copy of the upload with the two constant regions drawn,
/// plus the region list. The response flags itself as a placeholder so
/// clients never mistake it for detection output.
///
/// # Errors
/// - 400 Bad Request: validation or image decode failure
/// - 500 Internal Server Error: PNG re-encode failure
pub async fn annotate_handler(
    State(_state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, (StatusCode, String)> {
    request.validate().map_err(|e| {
        warn!("annotate validation failed: {}", e);
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

    let start = Instant::now();
    let (annotated, regions) = annotate(&image);
    let encoded = to_png_base64(&annotated).map_err(|e| {
        warn!("failed to encode overlay: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    debug!(
        "overlay drawn on {}x{} upload in {}ms",
        info.width,
        info.height,
        start.elapsed().as_millis()
    );

    Ok(Json(AnnotateResponse {
        image: encoded,
        regions,
        placeholder: true,
        width: info.width,
        height: info.height,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}
