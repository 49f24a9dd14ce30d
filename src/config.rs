//! Environment-driven configuration.
//!
//! Every external dependency of the node is configured here: the hosted
//! model endpoint and credential, the local OCR executable, and the speech
//! synthesis endpoint. The prototype hardcoded the OCR path and the API key
//! in source; both are environment variables now.

use std::env;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// HTTP listen port (`API_PORT`, default 8080)
    pub api_port: u16,
    /// Hosted model API key (`GEMINI_API_KEY`); remote analysis is disabled
    /// when absent
    pub gemini_api_key: Option<String>,
    /// Hosted model base URL (`GEMINI_ENDPOINT`)
    pub gemini_endpoint: String,
    /// Hosted model name (`GEMINI_MODEL`)
    pub gemini_model: String,
    /// OCR executable (`TESSERACT_CMD`); a bare name resolves via PATH
    pub tesseract_cmd: String,
    /// OCR language code (`TESSERACT_LANG`)
    pub tesseract_lang: String,
    /// Speech synthesis API key (`TTS_API_KEY`); narration is disabled when
    /// absent
    pub tts_api_key: Option<String>,
    /// Speech synthesis endpoint (`TTS_ENDPOINT`)
    pub tts_endpoint: String,
    /// Speech synthesis model (`TTS_MODEL`)
    pub tts_model: String,
    /// Default narration voice (`TTS_VOICE`)
    pub tts_voice: String,
}

impl NodeConfig {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> Self {
        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            gemini_api_key: env_opt("GEMINI_API_KEY"),
            gemini_endpoint: env_or(
                "GEMINI_ENDPOINT",
                "https://generativelanguage.googleapis.com",
            ),
            gemini_model: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
            tesseract_cmd: env_or("TESSERACT_CMD", "tesseract"),
            tesseract_lang: env_or("TESSERACT_LANG", "eng"),
            tts_api_key: env_opt("TTS_API_KEY"),
            tts_endpoint: env_or("TTS_ENDPOINT", "https://api.openai.com/v1/audio/speech"),
            tts_model: env_or("TTS_MODEL", "tts-1"),
            tts_voice: env_or("TTS_VOICE", "nova"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Missing and empty values both read as "not configured".
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
