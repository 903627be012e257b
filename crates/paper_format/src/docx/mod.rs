//! DOCX Export
//!
//! Packages a [`DocumentLayout`](crate::layout::model::DocumentLayout) as a
//! WordprocessingML file. A DOCX file is a ZIP archive containing XML parts:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `word/document.xml` - Main document content and section geometry
//! - `word/styles.xml` - Document defaults (typeface, size, spacing)
//! - `word/settings.xml` - Compatibility settings
//! - `word/footer1.xml` - Page footer with the live page number
//! - `word/_rels/document.xml.rels` - Document relationships
//! - `word/media/` - Embedded images
//!
//! Output is deterministic: part order, relationship ids, media names,
//! drawing ids and ZIP timestamps depend only on the layout.

mod content_types;
mod document_writer;
mod fields_writer;
mod footer_writer;
mod media_writer;
mod relationships;
mod styles_writer;
mod tables_writer;
mod writer;

pub use writer::{write_package, DocxWriter};

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    /// DrawingML namespace
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    /// WordprocessingML Drawing namespace
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    /// Picture namespace
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    pub const FOOTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const FOOTER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}

/// XML declaration that opens every part
pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escape text for element content or attribute values
///
/// Characters that XML 1.0 cannot carry at all (most C0 controls) are
/// dropped before escaping.
pub(crate) fn escape_xml(s: &str) -> String {
    let cleaned: String = s.chars().filter(|c| is_xml_char(*c)).collect();
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_escape_drops_control_characters() {
        assert_eq!(escape_xml("a\u{0}b\u{7}c\u{1F}"), "abc");
        assert_eq!(escape_xml("भारत\tok"), "भारत\tok");
    }
}
