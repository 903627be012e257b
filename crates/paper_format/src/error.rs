//! Error types for formatting operations

use thiserror::Error;

/// Errors that can occur while producing a question paper
#[derive(Debug, Error)]
pub enum FormatError {
    /// IO error (output directory not writable, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Paper model error
    #[error("Paper model error: {0}")]
    Model(#[from] paper_model::ModelError),

    /// The finished file could not be moved into place
    #[error("Failed to persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl From<quick_xml::Error> for FormatError {
    fn from(err: quick_xml::Error) -> Self {
        FormatError::Xml(err.to_string())
    }
}

/// Result type for formatting operations
pub type FormatResult<T> = std::result::Result<T, FormatError>;
