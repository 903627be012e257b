//! Page geometry and the two presentation modes
//!
//! Every size the layout passes use is read from a [`Presentation`], so
//! compact and normal papers differ only in these tables.

use crate::units::cm_to_twips;

/// ISO A4 portrait, in centimetres
pub const A4_WIDTH_CM: f32 = 21.0;
pub const A4_HEIGHT_CM: f32 = 29.7;

/// Serif face used for every run in the document
pub const TYPEFACE: &str = "Times New Roman";

/// Header and footer distance from the page edge, in twips
const HEADER_FOOTER_DISTANCE: i32 = 720;

/// Page margins in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Mode-dependent typography and spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub compact: bool,
    pub margins: Margins,
    pub base_font_size: f32,
    /// Default paragraph spacing-after, in points
    pub paragraph_space_after: f32,
    pub line_spacing: f32,

    pub school_name_size: f32,
    pub title_size: f32,
    pub metadata_size: f32,
    pub instructions_label_size: f32,
    pub instruction_size: f32,

    pub section_heading_size: f32,
    pub section_space_before: f32,
    pub section_space_after: f32,

    pub question_space_before: f32,
    pub question_space_after: f32,
    pub question_line_spacing: f32,
    pub question_text_size: f32,
    pub marks_size: f32,
    pub subpart_size: f32,

    /// Width and height cap for question diagrams, in centimetres
    pub image_max_cm: f32,
}

impl Presentation {
    /// Tight layout that saves paper
    pub fn compact() -> Self {
        Self {
            compact: true,
            margins: Margins {
                top: 1.2,
                bottom: 1.0,
                left: 1.5,
                right: 1.5,
            },
            base_font_size: 11.0,
            paragraph_space_after: 1.0,
            line_spacing: 1.0,
            school_name_size: 14.0,
            title_size: 12.0,
            metadata_size: 10.0,
            instructions_label_size: 10.0,
            instruction_size: 9.0,
            section_heading_size: 11.0,
            section_space_before: 6.0,
            section_space_after: 3.0,
            question_space_before: 3.0,
            question_space_after: 1.0,
            question_line_spacing: 1.0,
            question_text_size: 10.5,
            marks_size: 10.0,
            subpart_size: 10.0,
            image_max_cm: 8.0,
        }
    }

    /// Spacious layout
    pub fn normal() -> Self {
        Self {
            compact: false,
            margins: Margins {
                top: 2.0,
                bottom: 1.5,
                left: 2.0,
                right: 2.0,
            },
            base_font_size: 12.0,
            paragraph_space_after: 3.0,
            line_spacing: 1.15,
            school_name_size: 16.0,
            title_size: 13.0,
            metadata_size: 11.0,
            instructions_label_size: 11.0,
            instruction_size: 10.0,
            section_heading_size: 12.0,
            section_space_before: 10.0,
            section_space_after: 6.0,
            question_space_before: 4.0,
            question_space_after: 2.0,
            question_line_spacing: 1.1,
            question_text_size: 11.0,
            marks_size: 11.0,
            subpart_size: 11.0,
            image_max_cm: 10.0,
        }
    }

    pub fn for_mode(compact: bool) -> Self {
        if compact {
            Self::compact()
        } else {
            Self::normal()
        }
    }

    /// Width between the left and right margins
    pub fn text_width_cm(&self) -> f32 {
        A4_WIDTH_CM - self.margins.left - self.margins.right
    }

    pub fn page_setup(&self) -> PageSetup {
        PageSetup {
            width: cm_to_twips(A4_WIDTH_CM),
            height: cm_to_twips(A4_HEIGHT_CM),
            margin_top: cm_to_twips(self.margins.top),
            margin_bottom: cm_to_twips(self.margins.bottom),
            margin_left: cm_to_twips(self.margins.left),
            margin_right: cm_to_twips(self.margins.right),
            header: HEADER_FOOTER_DISTANCE,
            footer: HEADER_FOOTER_DISTANCE,
        }
    }
}

/// Section geometry in twips, as written to `w:sectPr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    pub width: i32,
    pub height: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub margin_left: i32,
    pub margin_right: i32,
    pub header: i32,
    pub footer: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tables() {
        let compact = Presentation::for_mode(true);
        let normal = Presentation::for_mode(false);
        assert_eq!(compact.base_font_size, 11.0);
        assert_eq!(normal.base_font_size, 12.0);
        assert_eq!(compact.paragraph_space_after, 1.0);
        assert_eq!(normal.line_spacing, 1.15);
        assert!((compact.text_width_cm() - 18.0).abs() < 1e-4);
        assert!((normal.text_width_cm() - 17.0).abs() < 1e-4);
    }

    #[test]
    fn test_page_setup_is_a4() {
        let setup = Presentation::compact().page_setup();
        assert_eq!((setup.width, setup.height), (11906, 16838));
        assert_eq!(setup.margin_top, 680);
        assert_eq!(setup.margin_bottom, 567);
        assert_eq!(setup.margin_left, 850);

        let setup = Presentation::normal().page_setup();
        assert_eq!(setup.margin_top, 1134);
        assert_eq!(setup.margin_bottom, 850);
    }
}
