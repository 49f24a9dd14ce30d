//! HTTP server wiring: application state, router, startup.

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::NodeConfig;
use crate::speech::{HostedTts, TtsProvider};
use crate::vision::{AnalysisClient, TesseractOcr};

/// Embedded single-page UI (the presentation layer).
const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    /// Remote analysis client; None when no API key is configured
    pub analysis: Option<Arc<AnalysisClient>>,
    /// Local OCR engine (always constructed; the executable may still be
    /// missing at call time)
    pub ocr: Arc<TesseractOcr>,
    /// Speech synthesizer; None when no API key is configured
    pub tts: Option<Arc<dyn TtsProvider>>,
}

impl AppState {
    pub fn from_config(config: &NodeConfig) -> anyhow::Result<Self> {
        let analysis = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(AnalysisClient::new(
                &config.gemini_endpoint,
                &config.gemini_model,
                key,
            )?)),
            None => None,
        };

        let tts: Option<Arc<dyn TtsProvider>> = config.tts_api_key.as_ref().map(|key| {
            Arc::new(
                HostedTts::new(&config.tts_endpoint, key)
                    .with_model(&config.tts_model)
                    .with_voice(&config.tts_voice),
            ) as Arc<dyn TtsProvider>
        });

        Ok(Self {
            analysis,
            ocr: Arc::new(TesseractOcr::new(
                &config.tesseract_cmd,
                &config.tesseract_lang,
            )),
            tts,
        })
    }

    /// State with no remote services configured, for handler tests.
    pub fn new_for_test() -> Self {
        Self {
            analysis: None,
            ocr: Arc::new(TesseractOcr::new("tesseract", "eng")),
            tts: None,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Presentation layer
        .route("/", get(index_handler))
        // Health check
        .route("/health", get(health_handler))
        // Analysis endpoints
        .route("/v1/analyze", post(crate::api::analyze::analyze_handler))
        .route(
            "/v1/extract-text",
            post(crate::api::extract_text::extract_text_handler),
        )
        .route("/v1/annotate", post(crate::api::annotate::annotate_handler))
        .route("/v1/speak", post(crate::api::speak::speak_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::version::get_version_info(),
        "analysis": state.analysis.is_some(),
        "speech": state.tts.is_some(),
        "ocrEngine": state.ocr.command(),
    }))
}

pub async fn start_server(config: NodeConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
