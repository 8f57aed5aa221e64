//! Canvas: owns the Cairo image surface and repaints it from the frame.

use super::color::Color;
use super::frame::Frame;
use super::render::{self, StrokeTheme};
use crate::util::Rect;
use log::trace;
use std::io::Write;
use thiserror::Error;

/// Errors raised while managing the drawing surface.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Surface or context creation failed
    #[error("cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    /// PNG encoding failed
    #[error("png encoding error: {0}")]
    Png(#[from] cairo::IoError),
}

/// In-progress stroke data rendered on top of the committed shapes.
#[derive(Debug, Clone, Copy)]
pub struct Provisional<'a> {
    /// Points captured so far
    pub points: &'a [(i32, i32)],
    /// Whether dashed mode is active for this stroke
    pub dashed: bool,
    /// Line thickness in pixels
    pub thick: f64,
}

/// Headless drawing surface.
///
/// The canvas never mutates pixels incrementally: every repaint clears the
/// surface and replays the frame's shape log in order, so the visible
/// content always corresponds to the log. Undo therefore needs no bitmap
/// history; popping the newest shape and repainting restores the previous
/// picture synchronously.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
    background: Color,
    theme: StrokeTheme,
    provisional_color: Color,
}

impl Canvas {
    /// Creates a blank canvas of the given pixel dimensions.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        theme: StrokeTheme,
        provisional_color: Color,
    ) -> Result<Self, CanvasError> {
        let width = width as i32;
        let height = height as i32;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;

        let canvas = Self {
            surface,
            width,
            height,
            background,
            theme,
            provisional_color,
        };
        Ok(canvas)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Stroke theme used for dashes and labels.
    pub fn theme(&self) -> &StrokeTheme {
        &self.theme
    }

    /// Clears the surface and replays the frame's shapes in draw order.
    ///
    /// Shapes whose bounding box lies fully outside the surface are culled.
    /// The in-progress stroke, if any, is painted last as a plain polyline
    /// (gray, or the dash style when dashed mode is active).
    pub fn repaint(
        &mut self,
        frame: &Frame,
        provisional: Option<Provisional<'_>>,
    ) -> Result<(), CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;

        let bg = self.background;
        let _ = ctx.save();
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = ctx.paint();
        let _ = ctx.restore();

        let bounds = Rect::new(0, 0, self.width, self.height);
        for shape in &frame.shapes {
            match (shape.bounding_box(), bounds) {
                (Some(bb), Some(canvas_rect)) if !bb.intersects(&canvas_rect) => {
                    trace!("culling off-canvas shape at {},{}", bb.x, bb.y);
                }
                (Some(_), _) => render::render_shape(&ctx, shape, &self.theme),
                (None, _) => {}
            }
        }

        if let Some(live) = provisional {
            let (color, dash) = if live.dashed {
                (self.theme.dash_color, Some(self.theme.dash_pattern.as_slice()))
            } else {
                (self.provisional_color, None)
            };
            render::render_provisional(&ctx, live.points, color, live.thick, dash);
        }

        Ok(())
    }

    /// Encodes the current surface contents as PNG into `stream`.
    pub fn write_png<W: Write>(&mut self, stream: &mut W) -> Result<(), CanvasError> {
        self.surface.flush();
        self.surface.write_to_png(stream)?;
        Ok(())
    }

    /// Samples one pixel as raw (r, g, b, a) bytes (premultiplied alpha).
    ///
    /// Returns `None` for coordinates outside the surface. Intended for
    /// diagnostics and tests; image export should go through [`write_png`].
    ///
    /// [`write_png`]: Canvas::write_png
    pub fn pixel_at(&mut self, x: i32, y: i32) -> Option<(u8, u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let px = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);
        Some((
            ((px >> 16) & 0xff) as u8,
            ((px >> 8) & 0xff) as u8,
            (px & 0xff) as u8,
            ((px >> 24) & 0xff) as u8,
        ))
    }
}
