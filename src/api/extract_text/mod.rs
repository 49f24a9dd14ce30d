//! Text extraction endpoint module
//!
//! Provides POST /v1/extract-text for local OCR over an uploaded image.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::extract_text_handler;
pub use request::ExtractTextRequest;
pub use response::ExtractTextResponse;
