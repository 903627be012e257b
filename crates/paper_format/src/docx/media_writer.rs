//! Media parts and inline drawings
//!
//! Every embedded image becomes `word/media/image{n}.{ext}` and is drawn
//! with a `wp:inline` element referencing it by relationship id.

use crate::docx::{escape_xml, namespaces};
use crate::units::cm_to_emu;
use paper_model::ImageFormat;

/// File name of the n-th embedded image (zero-based index)
pub fn media_filename(index: usize, format: ImageFormat) -> String {
    format!("image{}.{}", index + 1, format.extension())
}

/// Generate a w:drawing element for an inline image
///
/// `docpr_id` must be unique within the document.
pub fn generate_inline_drawing(
    rel_id: &str,
    width_cm: f32,
    height_cm: f32,
    docpr_id: u32,
    description: &str,
) -> String {
    let cx = cm_to_emu(width_cm);
    let cy = cm_to_emu(height_cm);
    let name = format!("Picture {}", docpr_id);

    format!(
        concat!(
            r#"<w:drawing>"#,
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{cx}" cy="{cy}"/>"#,
            r#"<wp:effectExtent l="0" t="0" r="0" b="0"/>"#,
            r#"<wp:docPr id="{id}" name="{name}" descr="{descr}"/>"#,
            r#"<wp:cNvGraphicFramePr>"#,
            r#"<a:graphicFrameLocks xmlns:a="{a}" noChangeAspect="1"/>"#,
            r#"</wp:cNvGraphicFramePr>"#,
            r#"<a:graphic xmlns:a="{a}">"#,
            r#"<a:graphicData uri="{pic}">"#,
            r#"<pic:pic xmlns:pic="{pic}">"#,
            r#"<pic:nvPicPr><pic:cNvPr id="0" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr>"#,
            r#"<pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>"#,
            r#"<pic:spPr>"#,
            r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
            r#"</pic:spPr>"#,
            r#"</pic:pic>"#,
            r#"</a:graphicData>"#,
            r#"</a:graphic>"#,
            r#"</wp:inline>"#,
            r#"</w:drawing>"#,
        ),
        cx = cx,
        cy = cy,
        id = docpr_id,
        name = name,
        descr = escape_xml(description),
        a = namespaces::A,
        pic = namespaces::PIC,
        rel = rel_id,
    )
}
