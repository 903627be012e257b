//! School header, exam title and metadata block

use crate::layout::images::LoadedImage;
use crate::layout::model::{
    Alignment, Block, BorderLine, Cell, Paragraph, RunFormat, Table, TableBorders,
};
use crate::layout::LayoutContext;
use paper_model::ExamPaper;

const LOGO_HEIGHT_BESIDE_NAME_CM: f32 = 1.8;
const LOGO_HEIGHT_ALONE_CM: f32 = 2.0;
const LOGO_CELL_WIDTH_CM: f32 = 2.5;
const TITLE_SPACING: f32 = 2.0;
const METADATA_SEPARATOR: &str = "  |  ";
const METADATA_LINE_SPACE_AFTER: f32 = 2.0;
const HEADER_DIVIDER: BorderLine = BorderLine::new(6, "000000");
const HEADER_DIVIDER_SPACING: f32 = 3.0;

/// Arrangement of the class/subject/time/marks line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLayout {
    /// No metadata field is present
    Omitted,
    /// One to three fields on a single centred line
    Line(Vec<String>),
    /// All four fields: `[[class, time], [subject, marks]]`
    Grid([[String; 2]; 2]),
}

/// Labelled metadata fields in canonical order, skipping empty ones
pub fn metadata_fields(paper: &ExamPaper) -> Vec<String> {
    [
        ("Class: ", &paper.class_name),
        ("Subject: ", &paper.subject),
        ("Time: ", &paper.time),
        ("Max. Marks: ", &paper.total_marks),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| format!("{}{}", label, value.trim()))
    .collect()
}

/// Decide how the metadata block is arranged
///
/// With all four fields present the grid pairs class with time on the
/// first row and subject with marks on the second.
pub fn metadata_layout(paper: &ExamPaper) -> MetadataLayout {
    let fields = metadata_fields(paper);
    match <[String; 4]>::try_from(fields) {
        Ok([class, subject, time, marks]) => MetadataLayout::Grid([[class, time], [subject, marks]]),
        Err(fields) if fields.is_empty() => MetadataLayout::Omitted,
        Err(fields) => MetadataLayout::Line(fields),
    }
}

/// Lay out the header: school row, title, metadata and the divider
pub(crate) fn layout_header(
    ctx: &mut LayoutContext,
    paper: &ExamPaper,
    school_name: &str,
    logo: Option<&LoadedImage>,
) {
    layout_school_row(ctx, school_name, logo);

    let style = ctx.style;
    let title = paper.exam_title.trim();
    if !title.is_empty() {
        ctx.push(Block::Paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .spacing(TITLE_SPACING, TITLE_SPACING)
                .text(title, RunFormat::sized(style.title_size).bold()),
        ));
    }

    let meta_format = RunFormat::sized(style.metadata_size);
    match metadata_layout(paper) {
        MetadataLayout::Omitted => {}
        MetadataLayout::Line(fields) => {
            ctx.push(Block::Paragraph(
                Paragraph::new()
                    .align(Alignment::Center)
                    .space_after(METADATA_LINE_SPACE_AFTER)
                    .text(fields.join(METADATA_SEPARATOR), meta_format),
            ));
        }
        MetadataLayout::Grid(rows) => {
            let half = style.text_width_cm() / 2.0;
            let cell = |text: &str, alignment: Alignment| {
                Cell::new(
                    half,
                    Paragraph::new()
                        .align(alignment)
                        .spacing(0.0, 0.0)
                        .text(text, meta_format.clone()),
                )
            };
            let table = rows.iter().fold(
                Table::new(Alignment::Center, vec![half, half], TableBorders::None),
                |table, [left, right]| {
                    table.with_row(
                        None,
                        vec![
                            cell(left.as_str(), Alignment::Left),
                            cell(right.as_str(), Alignment::Right),
                        ],
                    )
                },
            );
            ctx.push(Block::Table(table));
        }
    }

    ctx.push(Block::Paragraph(
        Paragraph::new()
            .spacing(HEADER_DIVIDER_SPACING, HEADER_DIVIDER_SPACING)
            .border_bottom(HEADER_DIVIDER),
    ));
}

fn layout_school_row(ctx: &mut LayoutContext, school_name: &str, logo: Option<&LoadedImage>) {
    let style = ctx.style;
    let name_format = RunFormat::sized(style.school_name_size).bold();
    let name = school_name.to_uppercase();

    match (logo, name.is_empty()) {
        (Some(logo), false) => {
            let (width, height) = logo.size_for_height_cm(LOGO_HEIGHT_BESIDE_NAME_CM);
            let picture = ctx.embed(logo, width, height);
            let name_width = style.text_width_cm() - LOGO_CELL_WIDTH_CM;
            let table = Table::new(
                Alignment::Center,
                vec![LOGO_CELL_WIDTH_CM, name_width],
                TableBorders::None,
            )
            .with_row(
                None,
                vec![
                    Cell::new(
                        LOGO_CELL_WIDTH_CM,
                        Paragraph::new().align(Alignment::Right).picture(picture),
                    ),
                    Cell::new(
                        name_width,
                        Paragraph::new().align(Alignment::Left).text(name, name_format),
                    ),
                ],
            );
            ctx.push(Block::Table(table));
        }
        (None, false) => {
            ctx.push(Block::Paragraph(
                Paragraph::new()
                    .align(Alignment::Center)
                    .space_after(0.0)
                    .text(name, name_format),
            ));
        }
        (Some(logo), true) => {
            let (width, height) = logo.size_for_height_cm(LOGO_HEIGHT_ALONE_CM);
            let picture = ctx.embed(logo, width, height);
            ctx.push(Block::Paragraph(
                Paragraph::new()
                    .align(Alignment::Center)
                    .space_after(0.0)
                    .picture(picture),
            ));
        }
        (None, true) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(class: &str, subject: &str, time: &str, marks: &str) -> ExamPaper {
        ExamPaper {
            class_name: class.into(),
            subject: subject.into(),
            time: time.into(),
            total_marks: marks.into(),
            ..ExamPaper::default()
        }
    }

    #[test]
    fn test_grid_pairing() {
        let layout = metadata_layout(&paper("IX", "Science", "3 Hours", "80"));
        assert_eq!(
            layout,
            MetadataLayout::Grid([
                ["Class: IX".to_string(), "Time: 3 Hours".to_string()],
                ["Subject: Science".to_string(), "Max. Marks: 80".to_string()],
            ])
        );
    }

    #[test]
    fn test_single_line_for_partial_metadata() {
        let layout = metadata_layout(&paper("IX", "", "3 Hours", " "));
        assert_eq!(
            layout,
            MetadataLayout::Line(vec!["Class: IX".into(), "Time: 3 Hours".into()])
        );
    }

    #[test]
    fn test_omitted_without_metadata() {
        assert_eq!(metadata_layout(&ExamPaper::new()), MetadataLayout::Omitted);
    }
}
