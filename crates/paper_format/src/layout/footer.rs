//! End-of-paper caption and the page footer

use crate::layout::model::{Alignment, Block, BorderLine, Paragraph, RunFormat};
use crate::layout::LayoutContext;

pub const END_CAPTION: &str = "— End of Question Paper —";
pub const PAGE_LABEL: &str = "Page ";

const END_DIVIDER: BorderLine = BorderLine::new(4, "000000");
const END_DIVIDER_SPACE_BEFORE: f32 = 12.0;
const END_CAPTION_SIZE: f32 = 9.0;
const END_CAPTION_COLOR: &str = "646464";
const FOOTER_SIZE: f32 = 8.0;
const FOOTER_COLOR: &str = "808080";

/// Divider and the closing caption after the last section
pub(crate) fn layout_end_of_paper(ctx: &mut LayoutContext) {
    ctx.push(Block::Paragraph(
        Paragraph::new()
            .space_before(END_DIVIDER_SPACE_BEFORE)
            .border_top(END_DIVIDER),
    ));
    ctx.push(Block::Paragraph(
        Paragraph::new().align(Alignment::Center).text(
            END_CAPTION,
            RunFormat::sized(END_CAPTION_SIZE)
                .italic()
                .color(END_CAPTION_COLOR),
        ),
    ));
}

/// Centred "Page N" line with a live page-number field
pub fn page_footer() -> Paragraph {
    let format = RunFormat::sized(FOOTER_SIZE).color(FOOTER_COLOR);
    Paragraph::new()
        .align(Alignment::Center)
        .spacing(0.0, 0.0)
        .text(PAGE_LABEL, format.clone())
        .page_field(format)
}
