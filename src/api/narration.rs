//! Shared narration step: synthesize MP3 audio for a result string.
//!
//! Every analysis interaction ends by reading its result aloud. When no
//! speech provider is configured the text features still work, so the
//! audio field is simply omitted. A configured provider that fails takes
//! the whole interaction down, matching the rest of the error taxonomy.

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::warn;

use crate::api::http_server::AppState;
use crate::speech::TtsRequest;

/// Returns `(audio_base64, mime)` or `(None, None)` when narration is off
/// or unavailable.
pub(crate) async fn narrate(
    state: &AppState,
    text: &str,
    speak: bool,
) -> Result<(Option<String>, Option<String>), (StatusCode, String)> {
    if !speak || text.is_empty() {
        return Ok((None, None));
    }

    let Some(tts) = state.tts.as_ref() else {
        warn!("speech synthesis not configured, skipping narration");
        return Ok((None, None));
    };

    let request = TtsRequest {
        text: text.to_string(),
        ..Default::default()
    };
    let bytes = tts.synthesize(request).await.map_err(|e| {
        warn!("speech synthesis failed: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            format!("Speech synthesis failed: {}", e),
        )
    })?;

    Ok((Some(STANDARD.encode(&bytes)), Some("audio/mpeg".to_string())))
}
