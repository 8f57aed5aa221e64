//! Shape definitions for the sketch canvas.

use super::color::Color;
use crate::util::Rect;
use serde::{Deserialize, Serialize};

/// Represents a drawable element committed to the canvas.
///
/// Each variant carries its own geometry and appearance so that committed
/// shapes render identically even if the session configuration changes later.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Shape {
    /// Completed freehand stroke, rendered as a smoothed gradient curve
    Stroke {
        /// Sequence of (x, y) samples captured from press to release
        points: Vec<(i32, i32)>,
        /// Render with the fixed dashed style instead of the gradient
        dashed: bool,
        /// Line thickness in pixels
        thick: f64,
        /// Ordinal label painted near the stroke start
        label: u32,
    },
    /// Cone stamp - filled apex-up triangle
    Cone {
        /// Center X coordinate
        cx: i32,
        /// Center Y coordinate
        cy: i32,
        /// Base width in pixels
        base: f64,
        /// Height in pixels
        height: f64,
        /// Fill color
        color: Color,
    },
    /// Disc stamp - filled circle
    Disc {
        /// Center X coordinate
        cx: i32,
        /// Center Y coordinate
        cy: i32,
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: Color,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to
    /// cover stroke width and, for strokes, the ordinal label.
    ///
    /// The returned rectangle is suitable for culling shapes that lie fully
    /// outside the canvas. Returns `None` only when the shape has no drawable
    /// area (e.g., an empty point list).
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Stroke {
                points,
                thick,
                label,
                ..
            } => bounding_box_for_stroke(points, *thick, *label),
            Shape::Cone {
                cx,
                cy,
                base,
                height,
                ..
            } => bounding_box_for_cone(*cx, *cy, *base, *height),
            Shape::Disc {
                cx, cy, radius, ..
            } => bounding_box_for_disc(*cx, *cy, *radius),
        }
    }
}

fn stroke_padding(thick: f64) -> i32 {
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1)
}

/// Height reserved above the stroke start for the ordinal label.
const LABEL_CLEARANCE: i32 = 34;

pub(crate) fn bounding_box_for_stroke(
    points: &[(i32, i32)],
    thick: f64,
    label: u32,
) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }
    let mut min_x = points[0].0;
    let mut max_x = points[0].0;
    let mut min_y = points[0].1;
    let mut max_y = points[0].1;

    for &(x, y) in &points[1..] {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let padding = stroke_padding(thick);
    min_x -= padding;
    max_x += padding;
    min_y -= padding;
    max_y += padding;

    // The label sits above the start point; reserve a generous estimate
    // rather than measuring the glyphs.
    let digits = label.to_string().len() as i32;
    min_y = min_y.min(points[0].1 - LABEL_CLEARANCE);
    max_x = max_x.max(points[0].0 + digits * 16);

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

pub(crate) fn bounding_box_for_cone(cx: i32, cy: i32, base: f64, height: f64) -> Option<Rect> {
    let half_base = (base / 2.0).ceil() as i32;
    let half_height = (height / 2.0).ceil() as i32;
    ensure_positive_rect(
        cx - half_base,
        cy - half_height,
        cx + half_base,
        cy + half_height,
    )
}

pub(crate) fn bounding_box_for_disc(cx: i32, cy: i32, radius: f64) -> Option<Rect> {
    let r = radius.ceil() as i32;
    ensure_positive_rect(cx - r, cy - r, cx + r, cy + r)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let (min_x, max_x) = if min_x == max_x {
        (min_x, max_x + 1)
    } else {
        (min_x, max_x)
    };
    let (min_y, max_y) = if min_y == max_y {
        (min_y, max_y + 1)
    } else {
        (min_y, max_y)
    };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{LIGHT_BLUE, ORANGE};

    #[test]
    fn stroke_bounding_box_expands_with_thickness_and_label() {
        let shape = Shape::Stroke {
            points: vec![(40, 60), (80, 100)],
            dashed: false,
            thick: 6.0,
            label: 7,
        };

        let rect = shape.bounding_box().expect("stroke should have bounds");
        assert_eq!(rect.x, 37);
        // Label clearance pushes the top edge above the stroke start.
        assert_eq!(rect.y, 60 - LABEL_CLEARANCE);
        assert!(rect.x + rect.width >= 83);
        assert_eq!(rect.y + rect.height, 103);
    }

    #[test]
    fn empty_stroke_has_no_bounds() {
        let shape = Shape::Stroke {
            points: vec![],
            dashed: false,
            thick: 2.0,
            label: 1,
        };
        assert!(shape.bounding_box().is_none());
    }

    #[test]
    fn single_point_stroke_still_has_area() {
        let rect = bounding_box_for_stroke(&[(5, 5)], 2.0, 1).expect("dot should have bounds");
        assert!(rect.width > 0);
        assert!(rect.height > 0);
    }

    #[test]
    fn cone_bounding_box_covers_triangle() {
        let shape = Shape::Cone {
            cx: 100,
            cy: 100,
            base: 30.0,
            height: 30.0,
            color: ORANGE,
        };

        let rect = shape.bounding_box().expect("cone should have bounds");
        assert_eq!(rect.x, 85);
        assert_eq!(rect.y, 85);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 30);
    }

    #[test]
    fn disc_bounding_box_covers_circle() {
        let shape = Shape::Disc {
            cx: 50,
            cy: 40,
            radius: 15.0,
            color: LIGHT_BLUE,
        };

        let rect = shape.bounding_box().expect("disc should have bounds");
        assert_eq!(rect.x, 35);
        assert_eq!(rect.y, 25);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 30);
    }
}
