//! Configuration file support for strokepad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/strokepad/config.toml`.
//! Settings include canvas dimensions, stroke appearance, stamp glyph
//! geometry, and label fonts.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, LabelConfig, StampConfig};

use crate::draw::{FontDescriptor, StrokeTheme, VIOLET};
use crate::input::SessionState;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// thickness = 2.0
/// dash_pattern = [10.0, 20.0]
///
/// [stamps]
/// cone_color = "orange"
/// disc_radius = 15.0
///
/// [label]
/// font_family = "Sans"
/// size = 20.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas surface dimensions and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke appearance (thickness, dash style, smoothing control)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Stamp glyph geometry and colors
    #[serde(default)]
    pub stamps: StampConfig,

    /// Stroke ordinal label font and color
    #[serde(default)]
    pub label: LabelConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `drawing.thickness`: 1.0 - 20.0
    /// - `drawing.smoothing`: 0.0 - 1.0
    /// - `drawing.dash_pattern`: non-empty, positive lengths
    /// - `stamps.cone_base` / `stamps.cone_height`: 4.0 - 200.0
    /// - `stamps.disc_radius`: 2.0 - 100.0
    /// - `label.size`: 6.0 - 72.0
    fn validate_and_clamp(&mut self) {
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        if !(1.0..=20.0).contains(&self.drawing.thickness) {
            log::warn!(
                "Invalid thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.thickness
            );
            self.drawing.thickness = self.drawing.thickness.clamp(1.0, 20.0);
        }

        if !(0.0..=1.0).contains(&self.drawing.smoothing) {
            log::warn!(
                "Invalid smoothing {:.2}, clamping to 0.0-1.0 range",
                self.drawing.smoothing
            );
            self.drawing.smoothing = self.drawing.smoothing.clamp(0.0, 1.0);
        }

        let pattern_ok = !self.drawing.dash_pattern.is_empty()
            && self.drawing.dash_pattern.iter().all(|&len| len > 0.0);
        if !pattern_ok {
            log::warn!(
                "Invalid dash_pattern {:?}, falling back to [10, 20]",
                self.drawing.dash_pattern
            );
            self.drawing.dash_pattern = vec![10.0, 20.0];
        }

        if !(4.0..=200.0).contains(&self.stamps.cone_base) {
            log::warn!(
                "Invalid cone_base {:.1}, clamping to 4.0-200.0 range",
                self.stamps.cone_base
            );
            self.stamps.cone_base = self.stamps.cone_base.clamp(4.0, 200.0);
        }
        if !(4.0..=200.0).contains(&self.stamps.cone_height) {
            log::warn!(
                "Invalid cone_height {:.1}, clamping to 4.0-200.0 range",
                self.stamps.cone_height
            );
            self.stamps.cone_height = self.stamps.cone_height.clamp(4.0, 200.0);
        }
        if !(2.0..=100.0).contains(&self.stamps.disc_radius) {
            log::warn!(
                "Invalid disc_radius {:.1}, clamping to 2.0-100.0 range",
                self.stamps.disc_radius
            );
            self.stamps.disc_radius = self.stamps.disc_radius.clamp(2.0, 100.0);
        }

        if !(6.0..=72.0).contains(&self.label.size) {
            log::warn!(
                "Invalid label size {:.1}, clamping to 6.0-72.0 range",
                self.label.size
            );
            self.label.size = self.label.size.clamp(6.0, 72.0);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.label.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .label
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.label.font_weight
            );
            self.label.font_weight = "normal".to_string();
        }

        if !matches!(
            self.label.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.label.font_style
            );
            self.label.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokepad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if
    /// not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns a Config with default values.
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML syntax.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory (used by `strokepad --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Builds the stroke theme (dash style and label font) from this config.
    pub fn stroke_theme(&self) -> StrokeTheme {
        StrokeTheme {
            dash_pattern: self.drawing.dash_pattern.clone(),
            dash_color: VIOLET,
            label_font: FontDescriptor::new(
                self.label.font_family.clone(),
                self.label.font_weight.clone(),
                self.label.font_style.clone(),
            ),
            label_size: self.label.size,
            label_color: self.label.color.to_color(),
        }
    }

    /// Builds a fresh drawing session from this config.
    pub fn session_state(&self) -> SessionState {
        SessionState::with_defaults(
            self.drawing.thickness,
            self.drawing.dashed,
            self.stamps.cone_base,
            self.stamps.cone_height,
            self.stamps.cone_color.to_color(),
            self.stamps.disc_radius,
            self.stamps.disc_color.to_color(),
        )
    }
}
