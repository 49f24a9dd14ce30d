//! Speak endpoint handler

use axum::{extract::State, http::header, http::StatusCode, Json};
use bytes::Bytes;
use tracing::{info, warn};

use super::request::SpeakRequest;
use crate::api::http_server::AppState;
use crate::speech::TtsRequest;

/// POST /v1/speak - Synthesize MP3 audio for a text string
///
/// Returns raw `audio/mpeg` bytes suitable for an inline audio player.
///
/// # Errors
/// - 400 Bad Request: missing or oversized text
/// - 502 Bad Gateway: synthesis failed
/// - 503 Service Unavailable: no speech credential configured
pub async fn speak_handler(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> Result<([(header::HeaderName, &'static str); 1], Bytes), (StatusCode, String)> {
    request.validate().map_err(|e| {
        warn!("speak validation failed: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let tts = state.tts.as_ref().ok_or_else(|| {
        warn!("speak requested but no speech credential configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Speech synthesis not configured".to_string(),
        )
    })?;

    let text = request.text.unwrap_or_default();
    let char_count = text.len();
    let bytes = tts
        .synthesize(TtsRequest {
            text,
            voice: request.voice,
            ..Default::default()
        })
        .await
        .map_err(|e| {
            warn!("speech synthesis failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                format!("Speech synthesis failed: {}", e),
            )
        })?;

    info!(
        "synthesized {} bytes of audio for {} chars",
        bytes.len(),
        char_count
    );

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes))
}
