use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading fonts or producing an image
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid font data: {0}")]
    InvalidFont(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Canvas must be non-empty, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}
