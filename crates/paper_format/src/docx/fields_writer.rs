//! Complex field runs (w:fldChar, w:instrText)

/// Writer for field codes in the exported document
pub struct FieldWriter;

impl FieldWriter {
    /// Write a PAGE field
    ///
    /// `rpr` is a pre-rendered `<w:rPr>` (or empty) repeated on every run of
    /// the field so the computed number matches the surrounding text. No
    /// cached result is written; the consumer computes it on open.
    pub fn write_page_field(xml: &mut String, rpr: &str) {
        Self::write_field(xml, "PAGE", rpr);
    }

    fn write_field(xml: &mut String, instruction: &str, rpr: &str) {
        Self::write_fld_char(xml, "begin", rpr);

        xml.push_str("<w:r>");
        xml.push_str(rpr);
        xml.push_str("<w:instrText xml:space=\"preserve\"> ");
        xml.push_str(instruction);
        xml.push_str(" </w:instrText></w:r>");

        Self::write_fld_char(xml, "separate", rpr);
        Self::write_fld_char(xml, "end", rpr);
    }

    fn write_fld_char(xml: &mut String, kind: &str, rpr: &str) {
        xml.push_str("<w:r>");
        xml.push_str(rpr);
        xml.push_str(&format!("<w:fldChar w:fldCharType=\"{}\"/>", kind));
        xml.push_str("</w:r>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_field_sequence() {
        let mut xml = String::new();
        FieldWriter::write_page_field(&mut xml, "");

        assert_eq!(
            xml,
            concat!(
                r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#,
                r#"<w:r><w:instrText xml:space="preserve"> PAGE </w:instrText></w:r>"#,
                r#"<w:r><w:fldChar w:fldCharType="separate"/></w:r>"#,
                r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#,
            )
        );
    }

    #[test]
    fn test_page_field_carries_run_properties() {
        let rpr = r#"<w:rPr><w:sz w:val="16"/></w:rPr>"#;
        let mut xml = String::new();
        FieldWriter::write_page_field(&mut xml, rpr);
        assert_eq!(xml.matches(rpr).count(), 4);
    }
}
