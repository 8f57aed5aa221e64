//! PNG export for the rendered canvas.

use crate::draw::{Canvas, CanvasError};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

/// Configuration for file export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory to write images to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("strokepad"),
            filename_template: "sketch_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

impl ExportConfig {
    /// The export directory with any leading tilde resolved against the
    /// home directory.
    pub fn resolved_directory(&self) -> PathBuf {
        expand_tilde(&self.directory.to_string_lossy())
    }
}

/// Generate a PNG filename from the template and current time.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the canvas to a timestamped PNG file in the configured directory.
///
/// # Returns
/// Path to the written file
pub fn export_canvas(canvas: &mut Canvas, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.resolved_directory())?;
    let filename = generate_filename(&config.filename_template);
    let file_path = directory.join(&filename);

    export_canvas_to(canvas, &file_path)?;
    Ok(file_path)
}

/// Writes the canvas as PNG to an explicit path.
pub fn export_canvas_to(canvas: &mut Canvas, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Exporting {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    canvas.write_png(&mut writer)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {written_size} bytes");

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
