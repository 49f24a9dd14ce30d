pub mod api;
pub mod config;
pub mod speech;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{ApiError, ErrorResponse};
pub use config::NodeConfig;
pub use speech::{HostedTts, SpeechError, TtsProvider, TtsRequest};
pub use vision::{
    AnalysisClient, AnalysisError, AnalysisReply, AnalysisTask, OcrError, TesseractOcr,
};
