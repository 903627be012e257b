//! Sections and questions
//!
//! Each question is a single paragraph with a bold `Q{number}.` label and
//! the marks pushed to a right tab stop, followed by its subparts and an
//! optional diagram. Nothing is reordered or dropped here.

use crate::layout::images::LoadedImage;
use crate::layout::model::{Alignment, Block, Paragraph, RunFormat};
use crate::layout::subparts::{classify_subparts, layout_subparts};
use crate::layout::LayoutContext;
use paper_model::{ImageKey, Question, Section};
use std::collections::BTreeMap;

/// Position of the right tab stop carrying the marks
pub const MARKS_TAB_STOP_CM: f32 = 18.0;

const IMAGE_INDENT_CM: f32 = 0.5;
const IMAGE_SPACING: f32 = 4.0;

/// Label printed before the question text
///
/// The number is printed verbatim, even when empty. Gaps are reported by
/// validation, never repaired here.
pub fn question_label(question: &Question) -> String {
    format!("Q{}. ", question.number)
}

pub(crate) fn layout_sections(
    ctx: &mut LayoutContext,
    sections: &[Section],
    images: &BTreeMap<ImageKey, LoadedImage>,
) {
    for (si, section) in sections.iter().enumerate() {
        tracing::debug!(
            "Laying out section {} ({} questions)",
            si,
            section.questions.len()
        );
        layout_section_heading(ctx, &section.display_name(si));

        for (qi, question) in section.questions.iter().enumerate() {
            layout_question(ctx, question);

            if !question.subparts.is_empty() {
                let classified = classify_subparts(&question.subparts, ctx.style.compact);
                tracing::debug!(
                    "Question {}_{}: {} subparts laid out as {}",
                    si,
                    qi,
                    question.subparts.len(),
                    classified.kind()
                );
                for block in layout_subparts(&classified, &ctx.style) {
                    ctx.push(block);
                }
            }

            if let Some(image) = images.get(&ImageKey::new(si, qi)) {
                layout_question_image(ctx, image);
            }
        }
    }
}

fn layout_section_heading(ctx: &mut LayoutContext, name: &str) {
    let style = ctx.style;
    ctx.push(Block::Paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .spacing(style.section_space_before, style.section_space_after)
            .text(
                name.to_uppercase(),
                RunFormat::sized(style.section_heading_size).bold(),
            ),
    ));
}

fn layout_question(ctx: &mut LayoutContext, question: &Question) {
    let style = ctx.style;
    let text_format = RunFormat::sized(style.question_text_size);

    let mut paragraph = Paragraph::new()
        .spacing(style.question_space_before, style.question_space_after)
        .line_spacing(style.question_line_spacing)
        .right_tab_cm(MARKS_TAB_STOP_CM)
        .text(question_label(question), text_format.clone().bold())
        .text(question.text.as_str(), text_format);

    let marks = question.marks.trim();
    if !marks.is_empty() {
        let marks_format = RunFormat::sized(style.marks_size).bold();
        paragraph = paragraph
            .tab(marks_format.clone())
            .text(format!("[{}]", marks), marks_format);
    }

    ctx.push(Block::Paragraph(paragraph));
}

fn layout_question_image(ctx: &mut LayoutContext, image: &LoadedImage) {
    let (width, height) = image.capped_size_cm(ctx.style.image_max_cm);
    let picture = ctx.embed(image, width, height);
    ctx.push(Block::Paragraph(
        Paragraph::new()
            .indent_cm(IMAGE_INDENT_CM)
            .spacing(IMAGE_SPACING, IMAGE_SPACING)
            .line_spacing(1.0)
            .picture(picture),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_label() {
        assert_eq!(question_label(&Question::new("21", "")), "Q21. ");
        assert_eq!(question_label(&Question::new("Q5", "")), "QQ5. ");
        assert_eq!(question_label(&Question::new("", "")), "Q. ");
        assert_eq!(question_label(&Question::new(" 3 ", "")), "Q 3 . ");
    }
}
