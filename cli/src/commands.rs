//! Subcommand implementations

use crate::settings::CliSettings;
use anyhow::{Context, Result};
use paper_format::{create_question_paper, generate_filename_today, FormatOptions};
use paper_model::{parse_structured_response, ExamPaper, ImageKey};
use std::path::{Path, PathBuf};

/// Flags shared by the commands that produce a document
#[derive(Debug, Default)]
pub struct RenderFlags {
    pub output: Option<PathBuf>,
    pub school: Option<String>,
    pub logo: Option<PathBuf>,
    pub normal: bool,
    pub images: Vec<(ImageKey, PathBuf)>,
}

/// Read a paper file, tolerating a code fence around the JSON
pub fn read_paper(path: &Path) -> Result<ExamPaper> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read paper: {}", path.display()))?;
    parse_structured_response(&text)
        .with_context(|| format!("Failed to parse paper JSON: {}", path.display()))
}

/// Parse a `S_Q=PATH` image argument
pub fn parse_image_arg(arg: &str) -> Result<(ImageKey, PathBuf), String> {
    let (key, path) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected S_Q=PATH, got {:?}", arg))?;
    let key: ImageKey = key.trim().parse().map_err(|e| format!("{}", e))?;
    if path.is_empty() {
        return Err(format!("missing image path in {:?}", arg));
    }
    Ok((key, PathBuf::from(path)))
}

/// Merge settings and flags into formatter options; flags win
pub fn format_options(settings: &CliSettings, flags: &RenderFlags) -> FormatOptions {
    let mut options = FormatOptions {
        compact: settings.compact && !flags.normal,
        school_name: flags.school.clone().or_else(|| settings.school_name.clone()),
        logo_path: flags.logo.clone().or_else(|| settings.logo_path.clone()),
        ..FormatOptions::default()
    };
    for (key, path) in &flags.images {
        options.question_images.insert(*key, path.clone());
    }
    options
}

/// Where to write: `-o` as a file, `-o` as an existing directory plus the
/// auto filename, or the settings output directory plus the auto filename
pub fn resolve_output(paper: &ExamPaper, settings: &CliSettings, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(generate_filename_today(paper)),
        Some(path) => path.to_path_buf(),
        None => settings.output_dir().join(generate_filename_today(paper)),
    }
}

pub fn format(paper_path: &Path, settings: &CliSettings, flags: &RenderFlags) -> Result<PathBuf> {
    let paper = read_paper(paper_path)?;
    let options = format_options(settings, flags);
    let output = resolve_output(&paper, settings, flags.output.as_deref());

    create_question_paper(&paper, &output, &options)
        .with_context(|| format!("Failed to write question paper: {}", output.display()))
}

/// Print validation issues; returns how many were found
pub fn validate(paper_path: &Path) -> Result<usize> {
    let paper = read_paper(paper_path)?;
    let report = paper.validate();

    if report.is_clean() {
        println!("No issues found");
    } else {
        for issue in &report.issues {
            println!("{}", issue);
        }
        println!("{} issue(s)", report.len());
    }
    Ok(report.len())
}

pub fn filename(paper_path: &Path) -> Result<String> {
    let paper = read_paper(paper_path)?;
    Ok(generate_filename_today(&paper))
}

/// Write the built-in demo paper
pub fn demo(settings: &CliSettings, flags: &RenderFlags) -> Result<PathBuf> {
    let paper = paper_model::sample::demo_paper();
    let mut options = format_options(settings, flags);
    if options.school_name.is_none() {
        options.school_name = Some(paper_model::sample::DEMO_SCHOOL_NAME.to_string());
    }
    let output = resolve_output(&paper, settings, flags.output.as_deref());

    create_question_paper(&paper, &output, &options)
        .with_context(|| format!("Failed to write demo paper: {}", output.display()))
}
