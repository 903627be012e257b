//! Paper Format - Print layout and DOCX packaging for exam papers
//!
//! Takes a structured [`ExamPaper`](paper_model::ExamPaper) and produces an
//! A4 WordprocessingML document: school header with optional logo, title
//! and metadata block, numbered instructions, sections with right-aligned
//! marks, subparts laid out as an option grid, a matching table or plain
//! lines, optional per-question diagrams, and a page-numbered footer.

mod api;
mod error;
mod filename;
mod options;
pub mod docx;
pub mod layout;
pub mod units;

pub use api::{create_question_paper, render_question_paper};
pub use error::*;
pub use filename::{generate_filename, generate_filename_today, FALLBACK_FILENAME};
pub use options::FormatOptions;

pub use layout::header::{metadata_layout, MetadataLayout};
pub use layout::subparts::{classify_subparts, split_match_row, MatchRow, SubpartLayout};
