//! Frame container: the ordered draw-command log.

use super::shape::Shape;
use serde::{Deserialize, Serialize};

/// Container for all shapes committed in the current drawing session.
///
/// The frame is an ordered log of draw commands (first = bottom layer,
/// last = top layer). Undo removes the newest entry and the canvas is
/// repainted from the remainder, which keeps undo synchronous and the
/// memory footprint proportional to what is actually drawn, unlike a
/// bitmap-snapshot history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Vector of all shapes in draw order
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the most recently added shape, if any.
    ///
    /// Calling this on an empty frame is a no-op.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Removes all shapes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Returns true when nothing has been drawn (or everything was undone).
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
