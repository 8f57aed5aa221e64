//! Drawing session state machine and pointer event handling.

use super::events::PointerButton;
use super::mode::Mode;
use crate::draw::{Color, Frame, Provisional, Shape};
use log::debug;

/// Current drawing phase.
///
/// Tracks whether the user is idle or has the pointer down recording a
/// freehand stroke. Phase transitions occur on pointer events.
#[derive(Debug)]
pub enum DrawingPhase {
    /// Not actively drawing - waiting for input
    Idle,
    /// Pointer held down, accumulating stroke samples
    Drawing {
        /// Points captured so far, in temporal order
        points: Vec<(i32, i32)>,
    },
}

/// Main session state for one drawing surface.
///
/// Holds the committed shape log, the interaction mode, the in-progress
/// stroke, and the drawing parameters. All pointer and control events flow
/// through here; the state reports when the canvas needs repainting via
/// [`take_redraw`].
///
/// [`take_redraw`]: SessionState::take_redraw
pub struct SessionState {
    /// Committed shapes in draw order (the undo log)
    pub frame: Frame,
    /// Current interaction mode
    pub mode: Mode,
    /// Current drawing phase
    pub phase: DrawingPhase,
    /// Whether new strokes use the dashed style
    pub dashed: bool,
    /// Stroke thickness in pixels
    pub stroke_thickness: f64,
    /// Completed-stroke count; baked into each stroke as its label.
    /// Monotonic for the whole session, never rewound by undo.
    pub stroke_counter: u32,
    /// Cone stamp base width in pixels
    pub cone_base: f64,
    /// Cone stamp height in pixels
    pub cone_height: f64,
    /// Cone stamp fill color
    pub cone_color: Color,
    /// Disc stamp radius in pixels
    pub disc_radius: f64,
    /// Disc stamp fill color
    pub disc_color: Color,
    /// Whether the canvas needs to be repainted
    needs_redraw: bool,
}

impl SessionState {
    /// Creates a session with the given drawing parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        stroke_thickness: f64,
        dashed: bool,
        cone_base: f64,
        cone_height: f64,
        cone_color: Color,
        disc_radius: f64,
        disc_color: Color,
    ) -> Self {
        Self {
            frame: Frame::new(),
            mode: Mode::default(),
            phase: DrawingPhase::Idle,
            dashed,
            stroke_thickness,
            stroke_counter: 0,
            cone_base,
            cone_height,
            cone_color,
            disc_radius,
            disc_color,
            needs_redraw: false,
        }
    }

    /// Consumes and returns the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Processes a pointer button press.
    ///
    /// - Left press in a placement mode stamps the glyph and reverts to
    ///   freehand (placement is single-shot).
    /// - Left press in freehand mode begins recording a stroke.
    /// - Right press cancels the in-progress stroke without committing it.
    pub fn on_pointer_press(&mut self, button: PointerButton, x: i32, y: i32) {
        match button {
            PointerButton::Left => match self.mode {
                Mode::PlaceCone => {
                    self.frame.add_shape(Shape::Cone {
                        cx: x,
                        cy: y,
                        base: self.cone_base,
                        height: self.cone_height,
                        color: self.cone_color,
                    });
                    self.mode = Mode::Freehand;
                    self.needs_redraw = true;
                    debug!("placed cone at ({x}, {y})");
                }
                Mode::PlaceDisc => {
                    self.frame.add_shape(Shape::Disc {
                        cx: x,
                        cy: y,
                        radius: self.disc_radius,
                        color: self.disc_color,
                    });
                    self.mode = Mode::Freehand;
                    self.needs_redraw = true;
                    debug!("placed disc at ({x}, {y})");
                }
                Mode::Freehand => {
                    if matches!(self.phase, DrawingPhase::Idle) {
                        self.phase = DrawingPhase::Drawing {
                            points: vec![(x, y)],
                        };
                        self.needs_redraw = true;
                    }
                }
            },
            PointerButton::Right => {
                if !matches!(self.phase, DrawingPhase::Idle) {
                    self.phase = DrawingPhase::Idle;
                    self.needs_redraw = true;
                }
            }
            _ => {}
        }
    }

    /// Processes pointer motion: extends the in-progress stroke.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        if let DrawingPhase::Drawing { points } = &mut self.phase {
            points.push((x, y));
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer button release: commits the in-progress stroke.
    ///
    /// The stroke counter increments once per completed stroke and the new
    /// value is baked into the shape as its label; undo never rewinds it.
    /// Releases without an active stroke are no-ops.
    pub fn on_pointer_release(&mut self, button: PointerButton) {
        if button != PointerButton::Left {
            return;
        }
        self.finish_stroke();
    }

    /// Processes the pointer leaving the surface, which ends the stroke the
    /// same way a release does.
    pub fn on_pointer_leave(&mut self) {
        self.finish_stroke();
    }

    fn finish_stroke(&mut self) {
        if let DrawingPhase::Drawing { points } =
            std::mem::replace(&mut self.phase, DrawingPhase::Idle)
        {
            self.stroke_counter += 1;
            debug!(
                "committing stroke #{} with {} points",
                self.stroke_counter,
                points.len()
            );
            self.frame.add_shape(Shape::Stroke {
                points,
                dashed: self.dashed,
                thick: self.stroke_thickness,
                label: self.stroke_counter,
            });
            self.needs_redraw = true;
        }
    }

    /// Toggles cone placement mode. Discards any in-progress stroke so a
    /// placement mode never coexists with active drawing.
    pub fn toggle_cone(&mut self) {
        self.discard_in_progress();
        self.mode = self.mode.toggle_cone();
        debug!("mode is now {:?}", self.mode);
    }

    /// Toggles disc placement mode. Discards any in-progress stroke.
    pub fn toggle_disc(&mut self) {
        self.discard_in_progress();
        self.mode = self.mode.toggle_disc();
        debug!("mode is now {:?}", self.mode);
    }

    fn discard_in_progress(&mut self) {
        if !matches!(self.phase, DrawingPhase::Idle) {
            self.phase = DrawingPhase::Idle;
            self.needs_redraw = true;
        }
    }

    /// Sets whether new strokes use the dashed style.
    pub fn set_dashed(&mut self, on: bool) {
        if self.dashed != on {
            self.dashed = on;
            // The provisional stroke changes style immediately.
            if !matches!(self.phase, DrawingPhase::Idle) {
                self.needs_redraw = true;
            }
        }
    }

    /// Removes the most recently committed shape. No-op when nothing is
    /// left to undo.
    pub fn undo(&mut self) {
        match self.frame.undo() {
            Some(shape) => {
                debug!("undo removed {shape:?}");
                self.needs_redraw = true;
            }
            None => debug!("undo requested on empty frame"),
        }
    }

    /// Removes every committed shape.
    pub fn clear(&mut self) {
        if !self.frame.is_empty() {
            self.frame.clear();
            self.needs_redraw = true;
        }
    }

    /// The in-progress stroke as provisional render data, if drawing.
    pub fn provisional(&self) -> Option<Provisional<'_>> {
        match &self.phase {
            DrawingPhase::Drawing { points } => Some(Provisional {
                points,
                dashed: self.dashed,
                thick: self.stroke_thickness,
            }),
            DrawingPhase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{LIGHT_BLUE, ORANGE};

    fn session() -> SessionState {
        SessionState::with_defaults(2.0, false, 30.0, 30.0, ORANGE, 15.0, LIGHT_BLUE)
    }

    fn draw_stroke(state: &mut SessionState, points: &[(i32, i32)]) {
        let (x0, y0) = points[0];
        state.on_pointer_press(PointerButton::Left, x0, y0);
        for &(x, y) in &points[1..] {
            state.on_pointer_motion(x, y);
        }
        state.on_pointer_release(PointerButton::Left);
    }

    #[test]
    fn stroke_commits_on_release_with_all_points() {
        let mut state = session();
        draw_stroke(&mut state, &[(0, 0), (10, 0), (20, 0)]);

        assert_eq!(state.frame.len(), 1);
        match &state.frame.shapes[0] {
            Shape::Stroke { points, label, .. } => {
                assert_eq!(points, &vec![(0, 0), (10, 0), (20, 0)]);
                assert_eq!(*label, 1);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
        assert!(state.take_redraw());
    }

    #[test]
    fn pointer_leave_ends_the_stroke() {
        let mut state = session();
        state.on_pointer_press(PointerButton::Left, 5, 5);
        state.on_pointer_motion(6, 6);
        state.on_pointer_leave();

        assert_eq!(state.frame.len(), 1);
        assert!(matches!(state.phase, DrawingPhase::Idle));
    }

    #[test]
    fn right_press_cancels_without_committing() {
        let mut state = session();
        state.on_pointer_press(PointerButton::Left, 5, 5);
        state.on_pointer_motion(6, 6);
        state.on_pointer_press(PointerButton::Right, 6, 6);
        state.on_pointer_release(PointerButton::Left);

        assert!(state.frame.is_empty());
        assert_eq!(state.stroke_counter, 0);
    }

    #[test]
    fn release_without_active_stroke_is_noop() {
        let mut state = session();
        state.on_pointer_release(PointerButton::Left);
        assert!(state.frame.is_empty());
        assert_eq!(state.stroke_counter, 0);
    }

    #[test]
    fn placement_is_single_shot_and_returns_to_freehand() {
        let mut state = session();
        state.toggle_cone();
        assert_eq!(state.mode, Mode::PlaceCone);

        state.on_pointer_press(PointerButton::Left, 40, 40);
        assert_eq!(state.mode, Mode::Freehand);
        assert!(matches!(state.frame.shapes[0], Shape::Cone { .. }));

        // The next press draws instead of stamping again.
        state.on_pointer_press(PointerButton::Left, 50, 50);
        assert!(matches!(state.phase, DrawingPhase::Drawing { .. }));
    }

    #[test]
    fn activating_one_placement_mode_clears_the_other() {
        let mut state = session();
        state.toggle_cone();
        state.toggle_disc();
        assert_eq!(state.mode, Mode::PlaceDisc);

        state.toggle_cone();
        assert_eq!(state.mode, Mode::PlaceCone);
    }

    #[test]
    fn toggling_placement_discards_in_progress_stroke() {
        let mut state = session();
        state.on_pointer_press(PointerButton::Left, 5, 5);
        state.on_pointer_motion(6, 6);
        state.toggle_disc();

        assert!(matches!(state.phase, DrawingPhase::Idle));
        assert!(state.frame.is_empty());
        assert_eq!(state.mode, Mode::PlaceDisc);
    }

    #[test]
    fn counter_increments_per_stroke_and_survives_undo() {
        let mut state = session();
        draw_stroke(&mut state, &[(0, 0), (5, 5)]);
        draw_stroke(&mut state, &[(10, 10), (15, 15)]);
        assert_eq!(state.stroke_counter, 2);

        state.undo();
        state.undo();
        state.undo(); // extra undo is a no-op
        assert!(state.frame.is_empty());
        assert_eq!(state.stroke_counter, 2);

        draw_stroke(&mut state, &[(20, 20), (25, 25)]);
        match &state.frame.shapes[0] {
            Shape::Stroke { label, .. } => assert_eq!(*label, 3),
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn stamps_participate_in_undo() {
        let mut state = session();
        state.toggle_disc();
        state.on_pointer_press(PointerButton::Left, 40, 40);
        draw_stroke(&mut state, &[(0, 0), (5, 5)]);

        state.undo();
        assert_eq!(state.frame.len(), 1);
        assert!(matches!(state.frame.shapes[0], Shape::Disc { .. }));
    }

    #[test]
    fn dashed_flag_is_baked_into_committed_strokes() {
        let mut state = session();
        state.set_dashed(true);
        draw_stroke(&mut state, &[(0, 0), (5, 5)]);
        state.set_dashed(false);
        draw_stroke(&mut state, &[(10, 10), (15, 15)]);

        match (&state.frame.shapes[0], &state.frame.shapes[1]) {
            (Shape::Stroke { dashed: d1, .. }, Shape::Stroke { dashed: d2, .. }) => {
                assert!(*d1);
                assert!(!*d2);
            }
            other => panic!("unexpected shapes: {other:?}"),
        }
    }

    #[test]
    fn provisional_exposes_live_points() {
        let mut state = session();
        assert!(state.provisional().is_none());

        state.on_pointer_press(PointerButton::Left, 1, 1);
        state.on_pointer_motion(2, 2);
        let live = state.provisional().expect("provisional stroke");
        assert_eq!(live.points, &[(1, 1), (2, 2)]);
    }
}
