//! Remote analysis endpoint module
//!
//! Provides POST /v1/analyze for the three hosted-model tasks
//! (scene, obstacles, assistance).

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_handler;
pub use request::AnalyzeRequest;
pub use response::AnalyzeResponse;
