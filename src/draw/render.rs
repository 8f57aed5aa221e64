//! Cairo-based rendering functions for shapes.

use super::color::{BLACK, Color, VIOLET};
use super::font::FontDescriptor;
use super::palette::stroke_color_at;
use super::shape::Shape;
use crate::util;

/// Appearance settings shared by every stroke in a session.
///
/// Committed strokes only record *whether* they are dashed; the dash
/// pattern, the dashed color, and the label font come from here so the
/// whole session stays visually consistent.
#[derive(Debug, Clone)]
pub struct StrokeTheme {
    /// Dash on/off lengths in pixels, applied when a stroke is dashed
    pub dash_pattern: Vec<f64>,
    /// Fixed color overriding the gradient for dashed strokes
    pub dash_color: Color,
    /// Font used for the stroke ordinal label
    pub label_font: FontDescriptor,
    /// Label font size in points
    pub label_size: f64,
    /// Label fill color
    pub label_color: Color,
}

impl Default for StrokeTheme {
    fn default() -> Self {
        Self {
            dash_pattern: vec![10.0, 20.0],
            dash_color: VIOLET,
            label_font: FontDescriptor::default(),
            label_size: 20.0,
            label_color: BLACK,
        }
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on
/// shape type.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, theme: &StrokeTheme) {
    match shape {
        Shape::Stroke {
            points,
            dashed,
            thick,
            label,
        } => {
            render_stroke(ctx, points, *dashed, *thick, *label, theme);
        }
        Shape::Cone {
            cx,
            cy,
            base,
            height,
            color,
        } => {
            render_cone(ctx, *cx, *cy, *base, *height, *color);
        }
        Shape::Disc {
            cx,
            cy,
            radius,
            color,
        } => {
            render_disc(ctx, *cx, *cy, *radius, *color);
        }
    }
}

/// Renders a completed freehand stroke as a smoothed, gradient-colored curve.
///
/// Consecutive raw points act as control points for a chain of quadratic
/// segments anchored at the midpoints of adjacent pairs, which yields a
/// continuous curve without a separate smoothing parameter. Segment `i` of an
/// `N`-point stroke is colored `stroke_color_at(i / (N - 2))`, sweeping the
/// full palette from start to end; the last two raw points are joined
/// directly so the curve terminates exactly at the final sample. When
/// `dashed` is set, the whole stroke is drawn in the theme's dash color and
/// pattern instead of the gradient.
///
/// Degenerate strokes do not reach the segment loop: an empty point list is
/// a no-op and a single point renders as a round dot plus its label.
pub fn render_stroke(
    ctx: &cairo::Context,
    points: &[(i32, i32)],
    dashed: bool,
    thick: f64,
    label: u32,
    theme: &StrokeTheme,
) {
    if points.is_empty() {
        return;
    }

    let _ = ctx.save();
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    if dashed {
        ctx.set_dash(&theme.dash_pattern, 0.0);
    } else {
        ctx.set_dash(&[], 0.0);
    }

    let n = points.len();
    if n == 1 {
        let color = if dashed {
            theme.dash_color
        } else {
            stroke_color_at(0.0)
        };
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let (x, y) = points[0];
        ctx.arc(
            x as f64,
            y as f64,
            (thick / 2.0).max(1.0),
            0.0,
            std::f64::consts::PI * 2.0,
        );
        let _ = ctx.fill();
    } else {
        // Midpoint smoothing: each segment starts where the previous one
        // ended, uses the raw point as control, and lands on the midpoint
        // of the adjacent pair.
        let mut current = (points[0].0 as f64, points[0].1 as f64);
        for i in 0..n - 2 {
            let anchor = util::midpoint(points[i], points[i + 1]);
            let position = i as f64 / (n - 2) as f64;
            let color = if dashed {
                theme.dash_color
            } else {
                stroke_color_at(position)
            };
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            quad_segment(ctx, current, points[i], anchor);
            let _ = ctx.stroke();
            current = anchor;
        }

        // Final segment joins the last two raw points directly so the path
        // terminates exactly at the last captured point.
        let position = (n as f64 - 2.0) / (n as f64 - 1.0);
        let color = if dashed {
            theme.dash_color
        } else {
            stroke_color_at(position)
        };
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let end = (points[n - 1].0 as f64, points[n - 1].1 as f64);
        quad_segment(ctx, current, points[n - 2], end);
        let _ = ctx.stroke();
    }

    let _ = ctx.restore();

    let (x0, y0) = points[0];
    render_label(ctx, x0, y0 - 10, label, theme);
}

/// Emits one quadratic segment from `start` through control point `control`
/// to `end` via exact degree elevation to Cairo's cubic `curve_to`.
fn quad_segment(ctx: &cairo::Context, start: (f64, f64), control: (i32, i32), end: (f64, f64)) {
    let (sx, sy) = start;
    let (qx, qy) = (control.0 as f64, control.1 as f64);
    let (ex, ey) = end;

    let c1x = sx + 2.0 / 3.0 * (qx - sx);
    let c1y = sy + 2.0 / 3.0 * (qy - sy);
    let c2x = ex + 2.0 / 3.0 * (qx - ex);
    let c2y = ey + 2.0 / 3.0 * (qy - ey);

    ctx.move_to(sx, sy);
    ctx.curve_to(c1x, c1y, c2x, c2y, ex, ey);
}

/// Renders the in-progress stroke as a plain polyline.
///
/// This is the live feedback shown while the pointer is still down; the
/// smoothed gradient version replaces it once the stroke is committed.
pub fn render_provisional(
    ctx: &cairo::Context,
    points: &[(i32, i32)],
    color: Color,
    thick: f64,
    dash_pattern: Option<&[f64]>,
) {
    if points.is_empty() {
        return;
    }

    let _ = ctx.save();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    if let Some(pattern) = dash_pattern {
        ctx.set_dash(pattern, 0.0);
    }

    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Renders a cone stamp (filled apex-up triangle) centered at (cx, cy).
pub fn render_cone(ctx: &cairo::Context, cx: i32, cy: i32, base: f64, height: f64, color: Color) {
    let [apex, left, right] = util::cone_vertices(cx as f64, cy as f64, base, height);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(apex.0, apex.1);
    ctx.line_to(left.0, left.1);
    ctx.line_to(right.0, right.1);
    ctx.close_path();
    let _ = ctx.fill();
}

/// Renders a disc stamp (filled circle) centered at (cx, cy).
pub fn render_disc(ctx: &cairo::Context, cx: i32, cy: i32, radius: f64, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(
        cx as f64,
        cy as f64,
        radius,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    let _ = ctx.fill();
}

/// Renders a stroke's ordinal label with its baseline at (x, y).
fn render_label(ctx: &cairo::Context, x: i32, y: i32, label: u32, theme: &StrokeTheme) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc_str = theme.label_font.to_pango_string(theme.label_size);
    let font_desc = pango::FontDescription::from_string(&font_desc_str);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&label.to_string());

    // Pango positions from the top-left corner; shift up so (x, y) is the
    // text baseline.
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(x as f64, y as f64 - baseline);

    let color = theme.label_color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{LIGHT_BLUE, ORANGE};
    use cairo::{Context, Format, ImageSurface};

    fn surface_and_ctx(width: i32, height: i32) -> (ImageSurface, Context) {
        let surface =
            ImageSurface::create(Format::ARgb32, width, height).expect("image surface");
        let ctx = Context::new(&surface).expect("cairo context");
        (surface, ctx)
    }

    fn pixel_at(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().expect("surface data");
        let offset = y * stride + x * 4;
        let px = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
        (
            ((px >> 16) & 0xff) as u8,
            ((px >> 8) & 0xff) as u8,
            (px & 0xff) as u8,
            ((px >> 24) & 0xff) as u8,
        )
    }

    #[test]
    fn disc_fills_center_with_its_color() {
        let (mut surface, ctx) = surface_and_ctx(100, 100);
        render_disc(&ctx, 50, 50, 15.0, LIGHT_BLUE);
        drop(ctx);

        let (r, g, b, a) = pixel_at(&mut surface, 50, 50);
        assert_eq!((r, g, b, a), (173, 216, 230, 255));
    }

    #[test]
    fn cone_fills_interior_with_its_color() {
        let (mut surface, ctx) = surface_and_ctx(100, 100);
        render_cone(&ctx, 50, 50, 30.0, 30.0, ORANGE);
        drop(ctx);

        // Point well inside the triangle, away from antialiased edges.
        let (r, g, b, a) = pixel_at(&mut surface, 50, 58);
        assert_eq!((r, g, b, a), (255, 165, 0, 255));
    }

    #[test]
    fn gradient_stroke_starts_green_and_ends_in_final_band() {
        let (mut surface, ctx) = surface_and_ctx(160, 120);
        let points = [(20, 60), (70, 60), (120, 60)];
        render_stroke(&ctx, &points, false, 2.0, 1, &StrokeTheme::default());
        drop(ctx);

        // First segment (position 0) is pure green.
        let (r, g, b, _) = pixel_at(&mut surface, 30, 60);
        assert_eq!((r, g, b), (0, 255, 0));

        // Final segment of a 3-point stroke sits at position 0.5: pure red.
        let (r, g, b, _) = pixel_at(&mut surface, 110, 60);
        assert_eq!((r, g, b), (255, 0, 0));
    }

    #[test]
    fn dashed_stroke_is_violet_at_dash_start() {
        let (mut surface, ctx) = surface_and_ctx(160, 120);
        let points = [(20, 60), (70, 60), (120, 60)];
        render_stroke(&ctx, &points, true, 2.0, 1, &StrokeTheme::default());
        drop(ctx);

        // Within the first 10px-long dash.
        let (r, g, b, _) = pixel_at(&mut surface, 23, 60);
        assert_eq!((r, g, b), (238, 130, 238));
    }

    #[test]
    fn single_point_stroke_renders_a_dot() {
        let (mut surface, ctx) = surface_and_ctx(100, 100);
        render_stroke(&ctx, &[(40, 40)], false, 6.0, 1, &StrokeTheme::default());
        drop(ctx);

        let (r, g, b, a) = pixel_at(&mut surface, 40, 40);
        assert_eq!((r, g, b), (0, 255, 0));
        assert_eq!(a, 255);
    }

    #[test]
    fn empty_stroke_paints_nothing() {
        let (mut surface, ctx) = surface_and_ctx(50, 50);
        render_stroke(&ctx, &[], false, 2.0, 1, &StrokeTheme::default());
        drop(ctx);

        let (.., a) = pixel_at(&mut surface, 25, 25);
        assert_eq!(a, 0);
    }

    #[test]
    fn provisional_polyline_uses_requested_color() {
        let (mut surface, ctx) = surface_and_ctx(100, 100);
        render_provisional(&ctx, &[(10, 50), (90, 50)], crate::draw::GRAY, 2.0, None);
        drop(ctx);

        let (r, g, b, _) = pixel_at(&mut surface, 40, 50);
        assert_eq!((r, g, b), (153, 153, 153));
    }
}
