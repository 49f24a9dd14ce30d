//! Speech endpoint module
//!
//! Provides POST /v1/speak returning raw MP3 audio for arbitrary text.

pub mod handler;
pub mod request;

pub use handler::speak_handler;
pub use request::SpeakRequest;
