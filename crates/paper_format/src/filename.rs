//! Output filename convention

use chrono::{Local, NaiveDate};
use paper_model::ExamPaper;

/// Name used when the paper carries no class, subject or title
pub const FALLBACK_FILENAME: &str = "Question_Paper.docx";

/// Number of title words kept in the filename
const TITLE_WORDS: usize = 3;

/// Build a descriptive filename for a paper
///
/// Components are `Class_{class}`, the subject with spaces replaced by
/// underscores, the first three words of the title, and a `YYYYMMDD` stamp,
/// joined by underscores with a `.docx` suffix. A paper with none of the
/// descriptive fields gets [`FALLBACK_FILENAME`].
pub fn generate_filename(paper: &ExamPaper, date: NaiveDate) -> String {
    let mut parts = Vec::new();

    let class = paper.class_name.trim();
    if !class.is_empty() {
        parts.push(format!("Class_{}", without_separators(class)));
    }

    let subject = paper.subject.trim();
    if !subject.is_empty() {
        parts.push(without_separators(&subject.replace(' ', "_")));
    }

    let title_words: Vec<&str> = paper.exam_title.split_whitespace().take(TITLE_WORDS).collect();
    if !title_words.is_empty() {
        parts.push(without_separators(&title_words.join("_")));
    }

    if parts.is_empty() {
        return FALLBACK_FILENAME.to_string();
    }

    parts.push(date.format("%Y%m%d").to_string());
    format!("{}.docx", parts.join("_"))
}

/// Path separators would turn a component into a directory
fn without_separators(component: &str) -> String {
    component.replace(['/', '\\'], "_")
}

/// [`generate_filename`] stamped with today's local date
pub fn generate_filename_today(paper: &ExamPaper) -> String {
    generate_filename(paper, Local::now().date_naive())
}
