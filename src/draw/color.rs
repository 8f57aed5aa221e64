//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use strokepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from 8-bit channel intensities.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the 8-bit channel intensities of this color, rounded.
    ///
    /// Alpha is dropped. Useful for asserting exact channel values in tests
    /// and for reporting colors in logs.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

// ============================================================================
// Predefined Color Constants (CSS-named palette)
// ============================================================================

/// Cone stamp fill (CSS `orange`, R=255, G=165, B=0)
pub const ORANGE: Color = Color::from_rgb8(255, 165, 0);

/// Disc stamp fill (CSS `lightblue`, R=173, G=216, B=230)
pub const LIGHT_BLUE: Color = Color::from_rgb8(173, 216, 230);

/// Dashed stroke color (CSS `violet`, R=238, G=130, B=238)
pub const VIOLET: Color = Color::from_rgb8(238, 130, 238);

/// Predefined black color (R=0, G=0, B=0)
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

/// Predefined white color (R=255, G=255, B=255)
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

/// Provisional stroke gray shown while a stroke is being drawn (`#999`)
pub const GRAY: Color = Color::from_rgb8(153, 153, 153);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_round_trips_named_constants() {
        assert_eq!(ORANGE.to_rgb8(), (255, 165, 0));
        assert_eq!(LIGHT_BLUE.to_rgb8(), (173, 216, 230));
        assert_eq!(VIOLET.to_rgb8(), (238, 130, 238));
        assert_eq!(GRAY.to_rgb8(), (153, 153, 153));
    }

    #[test]
    fn to_rgb8_clamps_out_of_range_components() {
        let hot = Color::new(1.5, -0.2, 0.5, 1.0);
        assert_eq!(hot.to_rgb8(), (255, 0, 128));
    }
}
