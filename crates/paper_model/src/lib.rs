//! Paper Model - Structured exam paper schema and editing support
//!
//! This crate defines the shared contract between the OCR/structuring
//! collaborator, the editor, and the document formatter: typed exam paper
//! records, lenient JSON ingest, a defensive validation pass, and a
//! caller-owned editing session with per-question image attachments.

mod error;
mod lenient;
mod paper;
mod image_key;
mod image;
mod ingest;
mod validate;
mod session;
pub mod sample;

pub use error::*;
pub use paper::*;
pub use image_key::*;
pub use image::*;
pub use ingest::*;
pub use validate::*;
pub use session::*;
