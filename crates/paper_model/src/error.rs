//! Error types for paper model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image key: {0:?} (expected \"<section>_<question>\")")]
    InvalidImageKey(String),

    #[error("No section at index {0}")]
    NoSuchSection(usize),

    #[error("No question {question} in section {section}")]
    NoSuchQuestion { section: usize, question: usize },

    #[error("Unsupported image data: {0}")]
    UnsupportedImage(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
