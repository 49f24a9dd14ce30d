//! Analyze endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use super::request::AnalyzeRequest;
use super::response::AnalyzeResponse;
use crate::api::http_server::AppState;
use crate::api::narration::narrate;
use crate::vision::{decode_base64_upload, to_png_base64, AnalysisError};

/// POST /v1/analyze - Run one hosted-model task over an uploaded image
///
/// Accepts a base64-encoded image and a task name, returns the model's
/// text reply plus optional MP3 narration.
///
/// # Errors
/// - 400 Bad Request: validation or image decode failure
/// - 429 Too Many Requests: upstream rate limit
/// - 502 Bad Gateway: model endpoint unreachable, rejected the credential,
///   or returned an unusable reply
/// - 503 Service Unavailable: no model credential configured
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let task = request.validate().map_err(|e| {
        warn!("analyze validation failed: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let client = state.analysis.as_ref().ok_or_else(|| {
        warn!("analyze requested but no model credential configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Remote analysis not configured".to_string(),
        )
    })?;

    let image_data = request
        .image
        .as_ref()
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "image is required".to_string()))?;

    let (image, info) = decode_base64_upload(image_data).map_err(|e| {
        warn!("failed to decode upload: {}", e);
        (StatusCode::BAD_REQUEST, format!("Invalid image: {}", e))
    })?;
    debug!(
        "decoded upload: {}x{}, {} bytes",
        info.width, info.height, info.size_bytes
    );

    // Normalize to PNG for the outbound call regardless of upload format
    let png_base64 = to_png_base64(&image).map_err(|e| {
        warn!("failed to re-encode upload: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let reply = client
        .analyze(&png_base64, task)
        .await
        .map_err(map_analysis_error)?;

    info!(
        "{} analysis complete: {} chars, {}ms",
        task.as_str(),
        reply.text.len(),
        reply.processing_time_ms
    );

    let (audio, audio_mime) = narrate(&state, &reply.text, request.speak).await?;

    Ok(Json(AnalyzeResponse {
        text: reply.text,
        task: task.as_str().to_string(),
        model: reply.model,
        processing_time_ms: reply.processing_time_ms,
        tokens_used: reply.tokens_used,
        audio,
        audio_mime,
    }))
}

/// Each typed failure maps to its own status; no string prefixes.
fn map_analysis_error(error: AnalysisError) -> (StatusCode, String) {
    let status = match &error {
        AnalysisError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        AnalysisError::Auth(_)
        | AnalysisError::Network(_)
        | AnalysisError::Api { .. }
        | AnalysisError::MalformedReply(_)
        | AnalysisError::EmptyReply => StatusCode::BAD_GATEWAY,
    };
    warn!("analysis failed: {}", error);
    (status, error.to_string())
}
