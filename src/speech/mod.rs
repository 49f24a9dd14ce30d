//! Speech synthesis for result narration.

pub mod engine;

pub use engine::{is_mp3_stream, HostedTts, SpeechError, TtsProvider, TtsRequest};
