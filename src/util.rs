//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file
//! - Stamp geometry (cone triangle vertices)
//! - Midpoint calculation for stroke smoothing
//! - An axis-aligned rectangle helper for canvas culling

use crate::draw::{Color, color::*};

// ============================================================================
// Stamp Geometry
// ============================================================================

/// Calculates the three vertices of a cone stamp (apex-up isosceles triangle).
///
/// The triangle is centered horizontally on `x` and vertically on `y`:
/// the apex sits half the height above the center, the base half below.
///
/// # Arguments
/// * `x` - Center X coordinate
/// * `y` - Center Y coordinate
/// * `base` - Base width in pixels
/// * `height` - Triangle height in pixels
///
/// # Returns
/// Array `[apex, base_left, base_right]` of vertex coordinates.
pub fn cone_vertices(x: f64, y: f64, base: f64, height: f64) -> [(f64, f64); 3] {
    let half_base = base / 2.0;
    let half_height = height / 2.0;
    [
        (x, y - half_height),
        (x - half_base, y + half_height),
        (x + half_base, y + half_height),
    ]
}

/// Returns the midpoint of two stroke points as floating-point coordinates.
///
/// Used as the on-curve anchor between consecutive control points when
/// smoothing a freehand stroke.
pub fn midpoint(a: (i32, i32), b: (i32, i32)) -> (f64, f64) {
    (
        (a.0 as f64 + b.0 as f64) / 2.0,
        (a.1 as f64 + b.1 as f64) / 2.0,
    )
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "orange", "lightblue", "violet", "black", "white", "gray"
///
/// # Arguments
/// * `name` - Color name string
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "orange" => Some(ORANGE),
        "lightblue" | "light-blue" => Some(LIGHT_BLUE),
        "violet" => Some(VIOLET),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for canvas culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if this rectangle overlaps the other.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ORANGE};

    #[test]
    fn cone_vertices_form_apex_up_triangle() {
        let [apex, left, right] = cone_vertices(50.0, 50.0, 20.0, 30.0);
        assert_eq!(apex, (50.0, 35.0));
        assert_eq!(left, (40.0, 65.0));
        assert_eq!(right, (60.0, 65.0));
    }

    #[test]
    fn midpoint_halves_between_points() {
        assert_eq!(midpoint((0, 0), (10, 4)), (5.0, 2.0));
        assert_eq!(midpoint((3, 3), (4, 4)), (3.5, 3.5));
    }

    #[test]
    fn name_color_mappings_resolve() {
        assert_eq!(name_to_color("Orange").unwrap(), ORANGE);
        assert_eq!(name_to_color("black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn rect_rejects_empty_dimensions() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::from_min_max(5, 5, 5, 10).is_none());
        assert!(Rect::new(0, 0, 1, 1).is_some());
    }

    #[test]
    fn rect_intersection_detects_overlap() {
        let a = Rect::new(0, 0, 10, 10).unwrap();
        let b = Rect::new(5, 5, 10, 10).unwrap();
        let c = Rect::new(20, 20, 5, 5).unwrap();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
