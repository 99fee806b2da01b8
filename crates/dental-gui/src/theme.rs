//! Theme and styling constants

use egui::Color32;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Fallback outline for statuses with no palette entry or an
    /// unparsable color value
    pub const FALLBACK_STROKE: Color32 = Color32::from_rgb(158, 158, 158);
    /// Tooth number labels
    pub const TOOTH_LABEL: Color32 = Color32::from_gray(110);
    /// Swatch background for statuses with no fill
    pub const UNFILLED: Color32 = Color32::WHITE;
}

/// Parse a CSS-style color as used in status styles.
///
/// Returns `None` for the `"none"` sentinel and for values that fail to
/// parse - callers fall back instead of failing.
pub fn css_color(value: &str) -> Option<Color32> {
    if value.eq_ignore_ascii_case("none") {
        return None;
    }
    Color32::from_hex(value).ok()
}
