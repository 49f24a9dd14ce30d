use anyhow::Result;
use eyeguide_node::{
    api::http_server::{start_server, AppState},
    config::NodeConfig,
};
use std::env;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting EyeGuide Node...\n");
    println!("📦 {}", eyeguide_node::version::get_version_string());
    println!();

    let config = NodeConfig::from_env();
    let api_port = config.api_port;
    let state = AppState::from_config(&config)?;

    if state.analysis.is_none() {
        println!("⚠️  GEMINI_API_KEY not set - remote analysis disabled");
    }
    if state.tts.is_none() {
        println!("⚠️  TTS_API_KEY not set - narration disabled");
    }
    println!("🔤 OCR engine: {}", state.ocr.command());

    println!("\nAPI Endpoints:");
    println!("  UI:           http://localhost:{}/", api_port);
    println!("  Health:       http://localhost:{}/health", api_port);
    println!(
        "  Analyze:      POST http://localhost:{}/v1/analyze",
        api_port
    );
    println!(
        "  Extract text: POST http://localhost:{}/v1/extract-text",
        api_port
    );
    println!(
        "  Annotate:     POST http://localhost:{}/v1/annotate",
        api_port
    );
    println!(
        "  Speak:        POST http://localhost:{}/v1/speak",
        api_port
    );
    println!("\nPress Ctrl+C to shutdown...\n");

    let mut server = tokio::spawn(start_server(config, state));

    // Run until the server dies (e.g. the port is already in use) or a
    // shutdown signal arrives; a server failure must surface, not hang
    tokio::select! {
        result = &mut server => {
            result??;
        }
        signal = signal::ctrl_c() => {
            signal?;
            println!("\n⏹️  Shutting down...");
            server.abort();
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
