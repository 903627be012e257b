//! [Content_Types].xml generation
//!
//! Defaults are keyed by extension, overrides by part name. Both are kept
//! in sorted maps so the generated part is stable.

use crate::docx::{content_type_values, escape_xml, namespaces, XML_DECLARATION};
use paper_model::ImageFormat;
use std::collections::BTreeMap;

/// Content types declared by the package
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension (e.g., "xml" -> "application/xml")
    pub defaults: BTreeMap<String, String>,
    /// Override content types by part name (e.g., "/word/document.xml" -> "...")
    pub overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Content types with the `rels` and `xml` defaults every package needs
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", content_type_values::RELATIONSHIPS);
        ct.add_default("xml", content_type_values::XML);
        ct
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_ascii_lowercase(), content_type.to_string());
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.insert(normalized, content_type.to_string());
    }

    /// Declare the extension of an embedded image
    pub fn add_image(&mut self, format: ImageFormat) {
        self.add_default(format.extension(), format.mime_type());
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            ));
        }

        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part),
                escape_xml(ct)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

/// Content types for a question paper package
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();
    ct.add_override("/word/document.xml", content_type_values::DOCUMENT);
    ct.add_override("/word/styles.xml", content_type_values::STYLES);
    ct.add_override("/word/settings.xml", content_type_values::SETTINGS);
    ct.add_override("/word/footer1.xml", content_type_values::FOOTER);
    ct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_creation() {
        let ct = ContentTypes::new();
        assert!(ct.defaults.contains_key("rels"));
        assert!(ct.defaults.contains_key("xml"));
        assert!(ct.overrides.is_empty());
    }

    #[test]
    fn test_default_overrides_and_image_defaults() {
        let mut ct = create_default_content_types();
        ct.add_image(ImageFormat::Jpeg);
        ct.add_override("word/extra.xml", content_type_values::XML);
        let xml = ct.to_xml();

        assert!(xml.contains(&format!(
            r#"<Override PartName="/word/document.xml" ContentType="{}"/>"#,
            content_type_values::DOCUMENT
        )));
        assert!(xml.contains(&format!(
            r#"<Override PartName="/word/footer1.xml" ContentType="{}"/>"#,
            content_type_values::FOOTER
        )));
        assert!(xml.contains(r#"<Override PartName="/word/extra.xml""#));
        assert!(xml.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
        assert!(!xml.contains(r#"Extension="png""#));
    }

    #[test]
    fn test_to_xml_is_sorted() {
        let mut ct = create_default_content_types();
        ct.add_image(ImageFormat::Png);
        ct.add_image(ImageFormat::Gif);
        let xml = ct.to_xml();

        assert!(xml.starts_with(XML_DECLARATION));
        let gif = xml.find(r#"Extension="gif""#).unwrap();
        let png = xml.find(r#"Extension="png""#).unwrap();
        let rels = xml.find(r#"Extension="rels""#).unwrap();
        assert!(gif < png && png < rels);

        let document = xml.find("/word/document.xml").unwrap();
        let styles = xml.find("/word/styles.xml").unwrap();
        assert!(document < styles);
    }
}
