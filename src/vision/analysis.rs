//! Remote multimodal analysis client (Gemini-style generateContent API)
//!
//! The three assistive tasks differ only in their instruction string; each
//! call sends one text part and one inline PNG part and gets back plain
//! text. Failures are typed, never stringified: the HTTP surface decides
//! how to render each case.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

const SCENE_PROMPT: &str = "Describe this image briefly.";
const OBSTACLE_PROMPT: &str =
    "Identify objects or obstacles in this image and provide their positions for safe navigation.";
const ASSISTANCE_PROMPT: &str =
    "Provide task-specific guidance based on the content of this image.";

/// The assistive tasks served by the remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTask {
    Scene,
    Obstacles,
    Assistance,
}

impl AnalysisTask {
    /// Fixed instruction string for this task.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Scene => SCENE_PROMPT,
            Self::Obstacles => OBSTACLE_PROMPT,
            Self::Assistance => ASSISTANCE_PROMPT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Obstacles => "obstacles",
            Self::Assistance => "assistance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scene" => Some(Self::Scene),
            "obstacles" => Some(Self::Obstacles),
            "assistance" => Some(Self::Assistance),
            _ => None,
        }
    }
}

/// Typed failures from the remote model call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request to model endpoint failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("model endpoint rejected credentials (status {0})")]
    Auth(u16),

    #[error("model endpoint rate limit exceeded")]
    RateLimited,

    #[error("model endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not parse model reply: {0}")]
    MalformedReply(String),

    #[error("model returned no text")]
    EmptyReply,
}

// --- generateContent serde structs ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    total_token_count: u32,
}

/// Result of one analysis call.
#[derive(Debug)]
pub struct AnalysisReply {
    pub text: String,
    pub model: String,
    pub processing_time_ms: u64,
    pub tokens_used: u32,
}

/// Client for the hosted multimodal model.
pub struct AnalysisClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl AnalysisClient {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Result<Self, AnalysisError> {
        let client = Client::builder().timeout(Duration::from_secs(120)).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "analysis client configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Run one analysis task over a base64 PNG.
    pub async fn analyze(
        &self,
        png_base64: &str,
        task: AnalysisTask,
    ) -> Result<AnalysisReply, AnalysisError> {
        let start = Instant::now();

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: task.prompt().to_string(),
                    },
                    Part::Inline {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: png_base64.to_string(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 1024,
                temperature: 0.4,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        debug!("sending {} analysis request to {}", task.as_str(), url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AnalysisError::Auth(status.as_u16()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let reply: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::MalformedReply(e.to_string()))?;

        let text = reply
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.clone()))
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AnalysisError::EmptyReply);
        }

        let tokens_used = reply
            .usage_metadata
            .map(|u| u.total_token_count)
            .unwrap_or(0);

        info!(
            "{} analysis complete: {} chars, {} tokens, {}ms",
            task.as_str(),
            text.len(),
            tokens_used,
            start.elapsed().as_millis()
        );

        Ok(AnalysisReply {
            text,
            model: self.model.clone(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            tokens_used,
        })
    }
}
