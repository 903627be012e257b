//! Styles.xml writer
//!
//! All typography the layout does not set explicitly comes from here: the
//! serif face for every script, the base size and the default paragraph
//! spacing of the selected mode.

use crate::docx::{escape_xml, namespaces, XML_DECLARATION};
use crate::layout::page::{Presentation, TYPEFACE};
use crate::units::{half_points, line_240ths, pt_to_twips};

/// Writer for styles.xml
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self, presentation: &Presentation) -> String {
        let mut xml = String::new();

        xml.push_str(XML_DECLARATION);
        xml.push('\n');

        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml, presentation);
        self.write_normal_style(&mut xml);
        self.write_table_normal_style(&mut xml);

        xml.push_str("</w:styles>");
        xml
    }

    fn write_doc_defaults(&self, xml: &mut String, presentation: &Presentation) {
        let face = escape_xml(TYPEFACE);
        let size = half_points(presentation.base_font_size);

        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}" w:eastAsia="{0}"/>"#,
            face
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, size));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, size));
        xml.push_str("</w:rPr></w:rPrDefault>");

        xml.push_str("<w:pPrDefault><w:pPr>");
        xml.push_str(&format!(
            r#"<w:spacing w:before="0" w:after="{}" w:line="{}" w:lineRule="auto"/>"#,
            pt_to_twips(presentation.paragraph_space_after),
            line_240ths(presentation.line_spacing)
        ));
        xml.push_str("</w:pPr></w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str("<w:qFormat/>");
        xml.push_str("</w:style>");
    }

    fn write_table_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#);
        xml.push_str(r#"<w:name w:val="Normal Table"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
        xml.push_str("<w:semiHidden/>");
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblInd w:w="0" w:type="dxa"/>"#);
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");
    }
}

impl Default for StylesWriter {
    fn default() -> Self {
        Self::new()
    }
}
