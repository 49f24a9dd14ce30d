pub mod analyze;
pub mod annotate;
pub mod errors;
pub mod extract_text;
pub mod http_server;
pub mod narration;
pub mod speak;

pub use analyze::{analyze_handler, AnalyzeRequest, AnalyzeResponse};
pub use annotate::{annotate_handler, AnnotateRequest, AnnotateResponse};
pub use errors::{ApiError, ErrorResponse};
pub use extract_text::{extract_text_handler, ExtractTextRequest, ExtractTextResponse};
pub use http_server::{create_app, start_server, AppState};
pub use speak::{speak_handler, SpeakRequest};
