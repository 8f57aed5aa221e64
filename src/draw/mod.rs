//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the sketch canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`palette`]: the gradient colormap applied along freehand strokes
//! - [`Shape`]: committed drawing elements (strokes and stamp glyphs)
//! - [`Frame`]: ordered draw-command log, the unit of undo
//! - [`Canvas`]: the Cairo image surface repainted from a frame
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod font;
pub mod frame;
pub mod palette;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError, Provisional};
pub use color::Color;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use palette::stroke_color_at;
pub use render::{StrokeTheme, render_shape, render_stroke};
pub use shape::Shape;

// Re-export color constants for public API
pub use color::{BLACK, GRAY, LIGHT_BLUE, ORANGE, VIOLET, WHITE};
