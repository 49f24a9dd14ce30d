//! Local text extraction via the Tesseract executable
//!
//! The bitmap is written to a temp file and the configured executable is
//! invoked with `stdout` as the output target. Returns trimmed text; an
//! empty string means nothing was recognized.

use image::{DynamicImage, ImageFormat};
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to create temp file for OCR input: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("failed to encode image for OCR: {0}")]
    Encode(#[from] image::ImageError),

    #[error("could not run OCR engine '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR engine exited with code {code}: {stderr}")]
    Failed { code: i32, stderr: String },

    #[error("OCR engine produced non-UTF-8 output")]
    InvalidOutput,
}

/// Wrapper around a local Tesseract installation.
pub struct TesseractOcr {
    cmd: String,
    lang: String,
}

impl TesseractOcr {
    pub fn new(cmd: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            lang: lang.into(),
        }
    }

    /// Configured executable (name or path).
    pub fn command(&self) -> &str {
        &self.cmd
    }

    /// Extract text from a bitmap. Returns the trimmed recognized text,
    /// empty when the image contains no recognizable glyphs.
    pub async fn extract(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let dir = tempfile::tempdir().map_err(OcrError::TempFile)?;
        let input = dir.path().join("upload.png");
        image.save_with_format(&input, ImageFormat::Png)?;

        debug!("running {} on {}", self.cmd, input.display());
        let output = Command::new(&self.cmd)
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .output()
            .await
            .map_err(|source| OcrError::Spawn {
                cmd: self.cmd.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| OcrError::InvalidOutput)?;
        Ok(text.trim().to_string())
    }
}
