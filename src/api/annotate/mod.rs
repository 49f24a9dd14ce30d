//! Fixed-overlay endpoint module
//!
//! Provides POST /v1/annotate. The overlay is a placeholder, not a
//! detector; see `vision::annotator`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::annotate_handler;
pub use request::AnnotateRequest;
pub use response::AnnotateResponse;
