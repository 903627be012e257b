//! General instructions block

use crate::layout::model::{Block, BorderLine, Paragraph, RunFormat};
use crate::layout::LayoutContext;

pub const INSTRUCTIONS_LABEL: &str = "General Instructions:";

const LABEL_SPACE_BEFORE: f32 = 2.0;
const LABEL_SPACE_AFTER: f32 = 1.0;
const INSTRUCTION_INDENT_CM: f32 = 0.5;
const DIVIDER: BorderLine = BorderLine::new(4, "000000");
const DIVIDER_SPACE_BEFORE: f32 = 2.0;
const DIVIDER_SPACE_AFTER: f32 = 4.0;

/// Lay out the numbered instructions, then the divider that always
/// separates the header from the first section
pub(crate) fn layout_instructions(ctx: &mut LayoutContext, instructions: &[String]) {
    let style = ctx.style;

    if !instructions.is_empty() {
        ctx.push(Block::Paragraph(
            Paragraph::new()
                .spacing(LABEL_SPACE_BEFORE, LABEL_SPACE_AFTER)
                .text(
                    INSTRUCTIONS_LABEL,
                    RunFormat::sized(style.instructions_label_size)
                        .bold()
                        .underline(),
                ),
        ));

        let line_format = RunFormat::sized(style.instruction_size);
        for (index, instruction) in instructions.iter().enumerate() {
            ctx.push(Block::Paragraph(
                Paragraph::new()
                    .indent_cm(INSTRUCTION_INDENT_CM)
                    .spacing(0.0, 0.0)
                    .line_spacing(1.0)
                    .text(format!("{}. ", index + 1), line_format.clone())
                    .text(instruction.as_str(), line_format.clone()),
            ));
        }
    }

    ctx.push(Block::Paragraph(
        Paragraph::new()
            .spacing(DIVIDER_SPACE_BEFORE, DIVIDER_SPACE_AFTER)
            .border_bottom(DIVIDER),
    ));
}
