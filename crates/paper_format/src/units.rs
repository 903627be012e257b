//! Unit conversions between layout measures and OOXML attribute values
//!
//! Layout code works in points and centimetres; the package writer needs
//! twips (1/20 pt), half-points for font sizes, and EMUs for drawings.

/// Points per centimetre
const PT_PER_CM: f32 = 72.0 / 2.54;

/// EMUs per centimetre
const EMU_PER_CM: f64 = 360_000.0;

/// Convert centimetres to points
pub fn cm_to_pt(cm: f32) -> f32 {
    cm * PT_PER_CM
}

/// Convert points to twips
pub fn pt_to_twips(pt: f32) -> i32 {
    (pt * 20.0).round() as i32
}

/// Convert centimetres to twips
pub fn cm_to_twips(cm: f32) -> i32 {
    pt_to_twips(cm_to_pt(cm))
}

/// Convert centimetres to EMUs (English Metric Units)
pub fn cm_to_emu(cm: f32) -> i64 {
    (cm as f64 * EMU_PER_CM).round() as i64
}

/// Font size in half-points, as `w:sz` expects
pub fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round().max(1.0) as u32
}

/// Line spacing multiple in 240ths of a line
pub fn line_240ths(multiple: f32) -> i32 {
    (multiple * 240.0).round() as i32
}
