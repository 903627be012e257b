//! Public entry points
//!
//! One call per document: validate, normalize, load images, lay out,
//! package. Nothing is cached between calls.

use crate::docx::write_package;
use crate::error::FormatResult;
use crate::layout::images::ImageAssets;
use crate::layout::layout_paper;
use crate::options::FormatOptions;
use paper_model::ExamPaper;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Render a question paper to DOCX bytes
///
/// Validation issues are logged and never abort rendering. Logo and
/// question images that cannot be read are skipped.
///
/// # Example
///
/// ```ignore
/// use paper_format::{render_question_paper, FormatOptions};
///
/// let paper = paper_model::sample::demo_paper();
/// let bytes = render_question_paper(&paper, &FormatOptions::compact())?;
/// ```
pub fn render_question_paper(paper: &ExamPaper, options: &FormatOptions) -> FormatResult<Vec<u8>> {
    let report = paper.validate();
    for issue in &report.issues {
        tracing::warn!("Paper issue at {}", issue);
    }

    let paper = paper.normalized();
    let assets = ImageAssets::load(options.logo_path.as_deref(), &options.question_images);
    let school_name = options.display_school_name(&paper.school_name);

    let layout = layout_paper(&paper, school_name, options.compact, &assets);
    let bytes = write_package(&layout)?;

    tracing::info!(
        "Rendered question paper: {} sections, {} questions, {} images, {} bytes",
        paper.sections.len(),
        paper.question_count(),
        layout.media.len(),
        bytes.len()
    );

    Ok(bytes)
}

/// Render a question paper and write it to `output_path`
///
/// Missing parent directories are created. The file is written to a
/// temporary sibling first and moved into place, so a failure never leaves
/// a partial document behind. Returns the path written.
pub fn create_question_paper(
    paper: &ExamPaper,
    output_path: impl AsRef<Path>,
    options: &FormatOptions,
) -> FormatResult<PathBuf> {
    let output_path = output_path.as_ref();
    let bytes = render_question_paper(paper, options)?;

    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    file.persist(output_path)?;

    tracing::info!("Wrote question paper to {}", output_path.display());
    Ok(output_path.to_path_buf())
}
