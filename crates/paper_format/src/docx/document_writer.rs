//! Document.xml writer
//!
//! Converts a [`DocumentLayout`] to WordprocessingML. Paragraph and run
//! serialization lives in [`ParagraphWriter`] so that table cells and the
//! footer part share it.

use crate::docx::fields_writer::FieldWriter;
use crate::docx::media_writer::generate_inline_drawing;
use crate::docx::tables_writer::TableWriter;
use crate::docx::{escape_xml, namespaces, XML_DECLARATION};
use crate::error::{FormatError, FormatResult};
use crate::layout::model::{
    Block, BorderLine, DocumentLayout, Inline, Paragraph, ParagraphFormat, Picture, RunFormat,
};
use crate::layout::page::PageSetup;
use crate::units::{half_points, line_240ths, pt_to_twips};

/// Serializes paragraphs, resolving pictures to relationship ids
pub struct ParagraphWriter<'a> {
    /// Relationship id of each media item, by media index
    media_rels: &'a [String],
    next_drawing_id: u32,
}

impl<'a> ParagraphWriter<'a> {
    pub fn new(media_rels: &'a [String]) -> Self {
        Self {
            media_rels,
            next_drawing_id: 1,
        }
    }

    /// Write a paragraph element
    pub fn write_paragraph(&mut self, xml: &mut String, para: &Paragraph) -> FormatResult<()> {
        if para.format.is_empty() && para.inlines.is_empty() {
            xml.push_str("<w:p/>");
            return Ok(());
        }

        xml.push_str("<w:p>");
        write_paragraph_properties(xml, &para.format);

        for inline in &para.inlines {
            match inline {
                Inline::Text { text, format } => write_run(xml, text, format),
                Inline::Tab(format) => {
                    xml.push_str("<w:r>");
                    write_run_properties(xml, format);
                    xml.push_str("<w:tab/></w:r>");
                }
                Inline::Picture(picture) => self.write_picture(xml, picture)?,
                Inline::PageField(format) => {
                    let mut rpr = String::new();
                    write_run_properties(&mut rpr, format);
                    FieldWriter::write_page_field(xml, &rpr);
                }
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }

    fn write_picture(&mut self, xml: &mut String, picture: &Picture) -> FormatResult<()> {
        let rel_id = self.media_rels.get(picture.media).ok_or_else(|| {
            FormatError::Xml(format!(
                "picture references missing media item {}",
                picture.media
            ))
        })?;

        let docpr_id = self.next_drawing_id;
        self.next_drawing_id += 1;

        xml.push_str("<w:r>");
        xml.push_str(&generate_inline_drawing(
            rel_id,
            picture.width_cm,
            picture.height_cm,
            docpr_id,
            &picture.description,
        ));
        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Writer for document.xml
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    ///
    /// `media_rels` maps media indices to relationship ids; `footer_rel` is
    /// the relationship id of the default footer part.
    pub fn write(
        &self,
        layout: &DocumentLayout,
        media_rels: &[String],
        footer_rel: &str,
    ) -> FormatResult<String> {
        let mut xml = String::new();

        xml.push_str(XML_DECLARATION);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}" xmlns:pic="{}">"#,
            namespaces::W,
            namespaces::R,
            namespaces::WP,
            namespaces::A,
            namespaces::PIC,
        ));

        xml.push_str("<w:body>");

        let mut paragraphs = ParagraphWriter::new(media_rels);
        for block in &layout.body {
            match block {
                Block::Paragraph(para) => paragraphs.write_paragraph(&mut xml, para)?,
                Block::Table(table) => {
                    TableWriter::new().write_table(&mut xml, &mut paragraphs, table)?
                }
            }
        }

        write_section_properties(&mut xml, &layout.page, footer_rel);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the body-level w:sectPr
fn write_section_properties(xml: &mut String, page: &PageSetup, footer_rel: &str) {
    xml.push_str("<w:sectPr>");
    xml.push_str(&format!(
        r#"<w:footerReference w:type="default" r:id="{}"/>"#,
        footer_rel
    ));
    xml.push_str(&format!(
        r#"<w:pgSz w:w="{}" w:h="{}" w:orient="portrait"/>"#,
        page.width, page.height
    ));
    xml.push_str(&format!(
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
        page.margin_top,
        page.margin_right,
        page.margin_bottom,
        page.margin_left,
        page.header,
        page.footer
    ));
    xml.push_str("</w:sectPr>");
}

/// Write paragraph properties, if any
pub(crate) fn write_paragraph_properties(xml: &mut String, props: &ParagraphFormat) {
    if props.is_empty() {
        return;
    }

    xml.push_str("<w:pPr>");

    if props.border_top.is_some() || props.border_bottom.is_some() {
        xml.push_str("<w:pBdr>");
        if let Some(ref line) = props.border_top {
            write_border(xml, "top", line);
        }
        if let Some(ref line) = props.border_bottom {
            write_border(xml, "bottom", line);
        }
        xml.push_str("</w:pBdr>");
    }

    if !props.tab_stops.is_empty() {
        xml.push_str("<w:tabs>");
        for stop in &props.tab_stops {
            xml.push_str(&format!(
                r#"<w:tab w:val="right" w:pos="{}"/>"#,
                pt_to_twips(stop.position)
            ));
        }
        xml.push_str("</w:tabs>");
    }

    if props.space_before.is_some() || props.space_after.is_some() || props.line_spacing.is_some()
    {
        xml.push_str("<w:spacing");
        if let Some(before) = props.space_before {
            xml.push_str(&format!(r#" w:before="{}""#, pt_to_twips(before)));
        }
        if let Some(after) = props.space_after {
            xml.push_str(&format!(r#" w:after="{}""#, pt_to_twips(after)));
        }
        if let Some(multiple) = props.line_spacing {
            xml.push_str(&format!(
                r#" w:line="{}" w:lineRule="auto""#,
                line_240ths(multiple)
            ));
        }
        xml.push_str("/>");
    }

    if let Some(left) = props.indent_left {
        xml.push_str(&format!(r#"<w:ind w:left="{}"/>"#, pt_to_twips(left)));
    }

    if let Some(alignment) = props.alignment {
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_ooxml()));
    }

    xml.push_str("</w:pPr>");
}

pub(crate) fn write_border(xml: &mut String, edge: &str, line: &BorderLine) {
    xml.push_str(&format!(
        r#"<w:{} w:val="single" w:sz="{}" w:space="1" w:color="{}"/>"#,
        edge, line.size, line.color
    ));
}

/// Write a text run; '\t' becomes w:tab and '\n' becomes w:br
fn write_run(xml: &mut String, text: &str, format: &RunFormat) {
    xml.push_str("<w:r>");
    write_run_properties(xml, format);

    for (line_index, line) in text.split('\n').enumerate() {
        if line_index > 0 {
            xml.push_str("<w:br/>");
        }
        for (segment_index, segment) in line.split('\t').enumerate() {
            if segment_index > 0 {
                xml.push_str("<w:tab/>");
            }
            if segment.is_empty() {
                continue;
            }
            if segment.starts_with(' ') || segment.ends_with(' ') {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
            } else {
                xml.push_str("<w:t>");
            }
            xml.push_str(&escape_xml(segment));
            xml.push_str("</w:t>");
        }
    }

    xml.push_str("</w:r>");
}

/// Write run properties, if any
///
/// The typeface is never written per run; it comes from docDefaults.
pub(crate) fn write_run_properties(xml: &mut String, props: &RunFormat) {
    if props.is_empty() {
        return;
    }

    xml.push_str("<w:rPr>");

    if props.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }

    if props.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }

    if let Some(color) = props.color {
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color));
    }

    // Font size (in half-points)
    if let Some(size) = props.size {
        let half_pts = half_points(size);
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
    }

    if props.underline {
        xml.push_str(r#"<w:u w:val="single"/>"#);
    }

    xml.push_str("</w:rPr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::model::Alignment;
    use crate::layout::page::Presentation;

    fn write_one(para: &Paragraph) -> String {
        let mut xml = String::new();
        ParagraphWriter::new(&[]).write_paragraph(&mut xml, para).unwrap();
        xml
    }

    fn empty_layout() -> DocumentLayout {
        let presentation = Presentation::compact();
        DocumentLayout {
            page: presentation.page_setup(),
            presentation,
            body: Vec::new(),
            footer: Vec::new(),
            media: Vec::new(),
        }
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(write_one(&Paragraph::new()), "<w:p/>");
    }

    #[test]
    fn test_question_paragraph_properties() {
        let para = Paragraph::new()
            .spacing(3.0, 1.0)
            .line_spacing(1.15)
            .right_tab_cm(18.0)
            .text("Q1. ", RunFormat::sized(10.5).bold())
            .text("Define federalism.", RunFormat::sized(10.5))
            .tab(RunFormat::sized(10.0).bold())
            .text("[2]", RunFormat::sized(10.0).bold());
        let xml = write_one(&para);

        assert!(xml.contains(
            r#"<w:pPr><w:tabs><w:tab w:val="right" w:pos="10205"/></w:tabs><w:spacing w:before="60" w:after="20" w:line="276" w:lineRule="auto"/></w:pPr>"#
        ));
        assert!(xml.contains(
            r#"<w:r><w:rPr><w:b/><w:bCs/><w:sz w:val="21"/><w:szCs w:val="21"/></w:rPr><w:t xml:space="preserve">Q1. </w:t></w:r>"#
        ));
        assert!(xml.contains(r#"<w:r><w:rPr><w:b/><w:bCs/><w:sz w:val="20"/><w:szCs w:val="20"/></w:rPr><w:tab/></w:r>"#));
        assert!(xml.contains("<w:t>[2]</w:t>"));
    }

    #[test]
    fn test_borders_and_alignment() {
        let para = Paragraph::new()
            .align(Alignment::Center)
            .indent_cm(0.5)
            .border_bottom(BorderLine::new(6, "000000"));
        let xml = write_one(&para);
        assert_eq!(
            xml,
            concat!(
                r#"<w:p><w:pPr><w:pBdr><w:bottom w:val="single" w:sz="6" w:space="1" w:color="000000"/></w:pBdr>"#,
                r#"<w:ind w:left="283"/><w:jc w:val="center"/></w:pPr></w:p>"#
            )
        );
    }

    #[test]
    fn test_run_tabs_and_breaks() {
        let xml = write_one(&Paragraph::new().text("A\tB\nC & D", RunFormat::default()));
        assert_eq!(
            xml,
            "<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C &amp; D</w:t></w:r></w:p>"
        );
    }

    #[test]
    fn test_italic_colored_underlined_run() {
        let mut xml = String::new();
        write_run_properties(
            &mut xml,
            &RunFormat::sized(9.0).italic().underline().color("646464"),
        );
        assert_eq!(
            xml,
            r#"<w:rPr><w:i/><w:iCs/><w:color w:val="646464"/><w:sz w:val="18"/><w:szCs w:val="18"/><w:u w:val="single"/></w:rPr>"#
        );
    }

    #[test]
    fn test_picture_without_media_is_an_error() {
        let picture = Picture {
            media: 0,
            width_cm: 1.0,
            height_cm: 1.0,
            description: "logo.png".into(),
        };
        let mut xml = String::new();
        let result =
            ParagraphWriter::new(&[]).write_paragraph(&mut xml, &Paragraph::new().picture(picture));
        assert!(matches!(result, Err(FormatError::Xml(_))));
    }

    #[test]
    fn test_drawing_ids_are_sequential() {
        let picture = |media| Picture {
            media,
            width_cm: 2.0,
            height_cm: 2.0,
            description: String::new(),
        };
        let rels = vec!["rId4".to_string(), "rId5".to_string()];
        let mut writer = ParagraphWriter::new(&rels);
        let mut xml = String::new();
        writer
            .write_paragraph(&mut xml, &Paragraph::new().picture(picture(0)))
            .unwrap();
        writer
            .write_paragraph(&mut xml, &Paragraph::new().picture(picture(1)))
            .unwrap();

        assert!(xml.contains(r#"<wp:docPr id="1""#));
        assert!(xml.contains(r#"<wp:docPr id="2""#));
        assert!(xml.contains(r#"r:embed="rId5""#));
    }

    #[test]
    fn test_document_section_properties() {
        let xml = DocumentWriter::new()
            .write(&empty_layout(), &[], "rId3")
            .unwrap();

        assert!(xml.contains("<w:body><w:sectPr>"));
        assert!(xml.contains(r#"<w:footerReference w:type="default" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838" w:orient="portrait"/>"#));
        assert!(xml.contains(
            r#"<w:pgMar w:top="680" w:right="850" w:bottom="567" w:left="850" w:header="720" w:footer="720" w:gutter="0"/>"#
        ));
    }
}
