//! TTS provider trait and the hosted HTTP implementation.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech endpoint request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("speech endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("speech endpoint returned no audio")]
    EmptyAudio,

    #[error("speech endpoint returned data that is not MP3 audio")]
    BadAudio,
}

/// A narration request.
#[derive(Debug, Clone)]
pub struct TtsRequest {
    pub text: String,
    pub voice: Option<String>,
    pub speed: f32,
}

impl Default for TtsRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice: None,
            speed: 1.0,
        }
    }
}

/// Returns MP3 audio bytes.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    async fn synthesize(&self, req: TtsRequest) -> Result<Bytes, SpeechError>;
}

/// True when the bytes start with an MP3 frame sync or an ID3v2 tag.
pub fn is_mp3_stream(bytes: &[u8]) -> bool {
    match bytes {
        [b'I', b'D', b'3', ..] => true,
        [0xFF, b1, ..] if b1 & 0xE0 == 0xE0 => true,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Hosted TTS (OpenAI-compatible speech endpoint)
// ---------------------------------------------------------------------------

pub struct HostedTts {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    default_voice: String,
}

#[derive(Serialize)]
struct SpeechBody {
    model: String,
    input: String,
    voice: String,
    response_format: String,
    speed: f32,
}

impl HostedTts {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: "tts-1".to_string(),
            default_voice: "nova".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.default_voice = voice.into();
        self
    }
}

#[async_trait]
impl TtsProvider for HostedTts {
    async fn synthesize(&self, req: TtsRequest) -> Result<Bytes, SpeechError> {
        let body = SpeechBody {
            model: self.model.clone(),
            input: req.text,
            voice: req.voice.unwrap_or_else(|| self.default_voice.clone()),
            response_format: "mp3".to_string(),
            speed: req.speed,
        };
        info!(
            "synthesizing {} chars with model={}",
            body.input.len(),
            body.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        if !is_mp3_stream(&bytes) {
            return Err(SpeechError::BadAudio);
        }
        Ok(bytes)
    }
}
