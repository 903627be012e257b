//! DOCX Writer Infrastructure
//!
//! Creates the ZIP archive with the DOCX part structure. Relationships and
//! content types are settled before any part is written, so the package
//! can be streamed in a fixed order.

use crate::docx::content_types::{create_default_content_types, ContentTypes};
use crate::docx::document_writer::DocumentWriter;
use crate::docx::footer_writer::FooterWriter;
use crate::docx::media_writer::media_filename;
use crate::docx::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::docx::relationship_types;
use crate::docx::styles_writer::StylesWriter;
use crate::docx::{namespaces, XML_DECLARATION};
use crate::error::FormatResult;
use crate::layout::model::DocumentLayout;
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const FOOTER_PART: &str = "footer1.xml";

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: create_default_content_types(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
        }
    }

    /// Write a complete DOCX package and hand back the inner writer
    pub fn write(mut self, layout: &DocumentLayout) -> FormatResult<W> {
        let footer_rel = self
            .doc_rels
            .add(relationship_types::FOOTER, FOOTER_PART);

        let mut media_names = Vec::with_capacity(layout.media.len());
        let mut media_rels = Vec::with_capacity(layout.media.len());
        for (index, media) in layout.media.iter().enumerate() {
            let name = media_filename(index, media.format);
            media_rels.push(
                self.doc_rels
                    .add(relationship_types::IMAGE, &format!("media/{}", name)),
            );
            self.content_types.add_image(media.format);
            media_names.push(name);
        }

        let document_xml = DocumentWriter::new().write(layout, &media_rels, &footer_rel)?;
        let styles_xml = StylesWriter::new().write(&layout.presentation);
        let footer_xml = FooterWriter::new().write(&layout.footer)?;

        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;
        let root_rels_xml = self.root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;
        self.write_file("word/document.xml", &document_xml)?;
        self.write_file("word/styles.xml", &styles_xml)?;
        self.write_file("word/settings.xml", &generate_settings_xml())?;
        self.write_file(&format!("word/{}", FOOTER_PART), &footer_xml)?;
        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        for (name, media) in media_names.iter().zip(&layout.media) {
            self.write_binary(&format!("word/media/{}", name), &media.data)?;
        }

        tracing::debug!(
            "Packaged DOCX: {} body blocks, {} media items",
            layout.body.len(),
            layout.media.len()
        );

        Ok(self.zip.finish()?)
    }

    /// Write a file to the ZIP archive
    pub fn write_file(&mut self, path: &str, content: &str) -> FormatResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }

    /// Write binary data to the ZIP archive
    pub fn write_binary(&mut self, path: &str, data: &[u8]) -> FormatResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored) // Don't compress binary
            .last_modified_time(zip::DateTime::default());

        self.zip.start_file(path, options)?;
        self.zip.write_all(data)?;

        Ok(())
    }
}

/// Package a layout into DOCX bytes
pub fn write_package(layout: &DocumentLayout) -> FormatResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(layout)?;
    Ok(cursor.into_inner())
}

/// Generate a minimal settings.xml
pub fn generate_settings_xml() -> String {
    format!(
        concat!(
            "{}\n",
            r#"<w:settings xmlns:w="{}">"#,
            r#"<w:defaultTabStop w:val="720"/>"#,
            r#"<w:compat>"#,
            r#"<w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>"#,
            r#"</w:compat>"#,
            r#"</w:settings>"#,
        ),
        XML_DECLARATION,
        namespaces::W
    )
}
