//! footer1.xml writer

use crate::docx::document_writer::ParagraphWriter;
use crate::docx::{namespaces, XML_DECLARATION};
use crate::error::FormatResult;
use crate::layout::model::Paragraph;

/// Writer for the default page footer part
pub struct FooterWriter;

impl FooterWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate footer XML; the footer carries no pictures
    pub fn write(&self, paragraphs: &[Paragraph]) -> FormatResult<String> {
        let mut xml = String::new();

        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:ftr xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        let mut writer = ParagraphWriter::new(&[]);
        for para in paragraphs {
            writer.write_paragraph(&mut xml, para)?;
        }
        // A footer part must hold at least one paragraph
        if paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }

        xml.push_str("</w:ftr>");
        Ok(xml)
    }
}

impl Default for FooterWriter {
    fn default() -> Self {
        Self::new()
    }
}
