//! Table writer for DOCX files
//!
//! Generates fixed-layout w:tbl elements. Widths are absolute (dxa) so
//! column positions do not depend on cell content.

use crate::docx::document_writer::{write_border, ParagraphWriter};
use crate::error::FormatResult;
use crate::layout::model::{Cell, Row, Table, TableBorders};
use crate::units::cm_to_twips;

const TABLE_EDGES: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

/// Writer for table elements
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a table element
    pub fn write_table(
        &self,
        xml: &mut String,
        paragraphs: &mut ParagraphWriter<'_>,
        table: &Table,
    ) -> FormatResult<()> {
        xml.push_str("<w:tbl>");

        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);

        for row in &table.rows {
            self.write_table_row(xml, paragraphs, row)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    fn write_table_properties(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblPr>");

        xml.push_str(&format!(
            r#"<w:tblW w:w="{}" w:type="dxa"/>"#,
            cm_to_twips(table.width_cm())
        ));
        xml.push_str(&format!(
            r#"<w:jc w:val="{}"/>"#,
            table.alignment.as_ooxml()
        ));

        xml.push_str("<w:tblBorders>");
        for edge in TABLE_EDGES {
            match &table.borders {
                TableBorders::None => {
                    xml.push_str(&format!(r#"<w:{} w:val="nil"/>"#, edge));
                }
                TableBorders::All(line) => write_border(xml, edge, line),
            }
        }
        xml.push_str("</w:tblBorders>");

        xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);

        // Cell margins (default)
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");

        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);

        xml.push_str("</w:tblPr>");
    }

    fn write_table_grid(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblGrid>");
        for width in &table.column_widths_cm {
            xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, cm_to_twips(*width)));
        }
        xml.push_str("</w:tblGrid>");
    }

    fn write_table_row(
        &self,
        xml: &mut String,
        paragraphs: &mut ParagraphWriter<'_>,
        row: &Row,
    ) -> FormatResult<()> {
        xml.push_str("<w:tr>");

        if let Some(height) = row.min_height {
            xml.push_str(&format!(
                r#"<w:trPr><w:trHeight w:val="{}" w:hRule="atLeast"/></w:trPr>"#,
                height
            ));
        }

        for cell in &row.cells {
            self.write_table_cell(xml, paragraphs, cell)?;
        }

        xml.push_str("</w:tr>");
        Ok(())
    }

    fn write_table_cell(
        &self,
        xml: &mut String,
        paragraphs: &mut ParagraphWriter<'_>,
        cell: &Cell,
    ) -> FormatResult<()> {
        xml.push_str("<w:tc>");

        xml.push_str(&format!(
            r#"<w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr>"#,
            cm_to_twips(cell.width_cm)
        ));

        for para in &cell.paragraphs {
            paragraphs.write_paragraph(xml, para)?;
        }

        // Ensure at least one paragraph
        if cell.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }

        xml.push_str("</w:tc>");
        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
