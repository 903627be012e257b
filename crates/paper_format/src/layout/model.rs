//! Printable document model
//!
//! A flat list of paragraphs and tables with explicit formatting, produced
//! by the layout passes and consumed by the DOCX writer. Lengths are in
//! points unless a field says otherwise.

use crate::layout::page::{PageSetup, Presentation};
use crate::units::cm_to_pt;
use paper_model::ImageFormat;

/// A laid-out question paper ready for packaging
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub page: PageSetup,
    pub presentation: Presentation,
    pub body: Vec<Block>,
    /// Footer repeated on every page
    pub footer: Vec<Paragraph>,
    /// Embedded pictures, referenced by index from [`Picture::media`]
    pub media: Vec<Media>,
}

/// Body-level element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A single border line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderLine {
    /// Width in eighths of a point
    pub size: u32,
    /// Hex RGB colour without '#'
    pub color: &'static str,
}

impl BorderLine {
    pub const fn new(size: u32, color: &'static str) -> Self {
        Self { size, color }
    }
}

/// Right-aligned tab stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStop {
    /// Position from the left margin
    pub position: f32,
}

/// Paragraph-level formatting; `None` inherits the document defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    pub alignment: Option<Alignment>,
    pub indent_left: Option<f32>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
    /// Line spacing as a multiple of single spacing
    pub line_spacing: Option<f32>,
    pub tab_stops: Vec<TabStop>,
    pub border_top: Option<BorderLine>,
    pub border_bottom: Option<BorderLine>,
}

impl ParagraphFormat {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Character formatting; `None`/`false` inherits the document defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFormat {
    pub size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<&'static str>,
}

impl RunFormat {
    pub fn sized(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Inline picture referencing an embedded media item
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub media: usize,
    pub width_cm: f32,
    pub height_cm: f32,
    pub description: String,
}

/// Paragraph content
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text { text: String, format: RunFormat },
    /// Jump to the next tab stop
    Tab(RunFormat),
    Picture(Picture),
    /// Live current-page-number field
    PageField(RunFormat),
}

/// A paragraph with its content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub format: ParagraphFormat,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.format.alignment = Some(alignment);
        self
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.format.space_before = Some(before);
        self.format.space_after = Some(after);
        self
    }

    pub fn space_before(mut self, before: f32) -> Self {
        self.format.space_before = Some(before);
        self
    }

    pub fn space_after(mut self, after: f32) -> Self {
        self.format.space_after = Some(after);
        self
    }

    pub fn indent_cm(mut self, cm: f32) -> Self {
        self.format.indent_left = Some(cm_to_pt(cm));
        self
    }

    pub fn line_spacing(mut self, multiple: f32) -> Self {
        self.format.line_spacing = Some(multiple);
        self
    }

    pub fn right_tab_cm(mut self, cm: f32) -> Self {
        self.format.tab_stops.push(TabStop {
            position: cm_to_pt(cm),
        });
        self
    }

    pub fn border_top(mut self, line: BorderLine) -> Self {
        self.format.border_top = Some(line);
        self
    }

    pub fn border_bottom(mut self, line: BorderLine) -> Self {
        self.format.border_bottom = Some(line);
        self
    }

    pub fn text(mut self, text: impl Into<String>, format: RunFormat) -> Self {
        self.inlines.push(Inline::Text {
            text: text.into(),
            format,
        });
        self
    }

    pub fn tab(mut self, format: RunFormat) -> Self {
        self.inlines.push(Inline::Tab(format));
        self
    }

    pub fn picture(mut self, picture: Picture) -> Self {
        self.inlines.push(Inline::Picture(picture));
        self
    }

    pub fn page_field(mut self, format: RunFormat) -> Self {
        self.inlines.push(Inline::PageField(format));
        self
    }

    /// Concatenated text content, tabs as '\t'
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for inline in &self.inlines {
            match inline {
                Inline::Text { text, .. } => out.push_str(text),
                Inline::Tab(_) => out.push('\t'),
                Inline::Picture(_) | Inline::PageField(_) => {}
            }
        }
        out
    }
}

/// Table border treatment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBorders {
    /// Layout-only grid with every edge suppressed
    None,
    /// The same line on every outer and inner edge
    All(BorderLine),
}

/// A table cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub width_cm: f32,
    /// Never empty when written; an empty cell still gets one paragraph
    pub paragraphs: Vec<Paragraph>,
}

impl Cell {
    pub fn new(width_cm: f32, paragraph: Paragraph) -> Self {
        Self {
            width_cm,
            paragraphs: vec![paragraph],
        }
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Minimum height in twips
    pub min_height: Option<u32>,
    pub cells: Vec<Cell>,
}

/// A fixed-grid table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub alignment: Alignment,
    pub column_widths_cm: Vec<f32>,
    pub borders: TableBorders,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(alignment: Alignment, column_widths_cm: Vec<f32>, borders: TableBorders) -> Self {
        Self {
            alignment,
            column_widths_cm,
            borders,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, min_height: Option<u32>, cells: Vec<Cell>) -> Self {
        self.rows.push(Row { min_height, cells });
        self
    }

    pub fn width_cm(&self) -> f32 {
        self.column_widths_cm.iter().sum()
    }

    /// Text of every cell, row-major
    pub fn cell_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| {
                        cell.paragraphs
                            .iter()
                            .map(Paragraph::plain_text)
                            .collect::<Vec<_>>()
                            .join("\n")
                    })
                    .collect()
            })
            .collect()
    }
}

/// Raw image bytes to embed under `word/media/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub format: ImageFormat,
    pub data: Vec<u8>,
}
