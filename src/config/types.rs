//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Canvas surface settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color - a named color or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the appearance of freehand strokes.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub thickness: f64,

    /// Whether sessions start with the dashed style enabled
    #[serde(default)]
    pub dashed: bool,

    /// Dash on/off lengths in pixels for the dashed style
    #[serde(default = "default_dash_pattern")]
    pub dash_pattern: Vec<f64>,

    /// Smoothing weight control (valid range: 0.0 - 1.0).
    ///
    /// Accepted for forward compatibility; the current renderer anchors
    /// segments at fixed midpoints and does not consume this value.
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Color of the live polyline shown while a stroke is in progress
    #[serde(default = "default_provisional_color")]
    pub provisional_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            thickness: default_thickness(),
            dashed: false,
            dash_pattern: default_dash_pattern(),
            smoothing: default_smoothing(),
            provisional_color: default_provisional_color(),
        }
    }
}

/// Stamp glyph settings.
///
/// Controls the size and fill color of the cone and disc stamps.
#[derive(Debug, Serialize, Deserialize)]
pub struct StampConfig {
    /// Cone base width in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_cone_base")]
    pub cone_base: f64,

    /// Cone height in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_cone_height")]
    pub cone_height: f64,

    /// Cone fill color
    #[serde(default = "default_cone_color")]
    pub cone_color: ColorSpec,

    /// Disc radius in pixels (valid range: 2.0 - 100.0)
    #[serde(default = "default_disc_radius")]
    pub disc_radius: f64,

    /// Disc fill color
    #[serde(default = "default_disc_color")]
    pub disc_color: ColorSpec,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            cone_base: default_cone_base(),
            cone_height: default_cone_height(),
            cone_color: default_cone_color(),
            disc_radius: default_disc_radius(),
            disc_color: default_disc_color(),
        }
    }
}

/// Stroke label settings.
///
/// Controls the ordinal label painted near each stroke's start point.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Font family name for labels (e.g., "Sans", "Arial", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Label font size in points (valid range: 6.0 - 72.0)
    #[serde(default = "default_label_size")]
    pub size: f64,

    /// Label fill color
    #[serde(default = "default_label_color")]
    pub color: ColorSpec,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            size: default_label_size(),
            color: default_label_color(),
        }
    }
}

// ============================================================================
// Default value functions (referenced by serde attributes)
// ============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_dash_pattern() -> Vec<f64> {
    vec![10.0, 20.0]
}

fn default_smoothing() -> f64 {
    0.5
}

fn default_provisional_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_cone_base() -> f64 {
    30.0
}

fn default_cone_height() -> f64 {
    30.0
}

fn default_cone_color() -> ColorSpec {
    ColorSpec::Name("orange".to_string())
}

fn default_disc_radius() -> f64 {
    15.0
}

fn default_disc_color() -> ColorSpec {
    ColorSpec::Name("lightblue".to_string())
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_label_size() -> f64 {
    20.0
}

fn default_label_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}
