//! Relationships (.rels) generation
//!
//! Parts of the package are connected through relationships. Ids are
//! handed out in insertion order (`rId1`, `rId2`, ...) and written in that
//! same order.

use crate::docx::{escape_xml, namespaces, relationship_types, XML_DECLARATION};

/// A single relationship in a .rels file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Unique ID within the rels file (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part
    pub target: String,
}

/// Ordered collection of relationships for one source part
#[derive(Debug, Clone)]
pub struct Relationships {
    relationships: Vec<Relationship>,
    next_id: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new()
    }
}

impl Relationships {
    pub fn new() -> Self {
        Self {
            relationships: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;

        self.relationships.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });

        id
    }

    /// Generate XML content for the .rels file
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespaces::PKG_REL
        ));

        for rel in &self.relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.id,
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Root .rels pointing at the main document
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::DOCUMENT, "word/document.xml");
    rels
}

/// document.xml.rels with the styles and settings parts
///
/// The footer and media relationships are appended by the writer.
pub fn create_document_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::STYLES, "styles.xml");
    rels.add(relationship_types::SETTINGS, "settings.xml");
    rels
}
