//! JSON event scripts: a recorded pointer/control session that can be
//! replayed against a canvas.
//!
//! A script is a JSON array of tagged events, e.g.:
//!
//! ```json
//! [
//!   { "event": "press", "x": 10, "y": 10 },
//!   { "event": "motion", "x": 40, "y": 30 },
//!   { "event": "release" },
//!   { "event": "toggle_disc" },
//!   { "event": "press", "x": 100, "y": 100 }
//! ]
//! ```
//!
//! Replaying a script drives the same state machine the interactive
//! frontends use, which makes the full pipeline exercisable headlessly.

use crate::draw::{Canvas, CanvasError};
use crate::input::{PointerButton, SessionState};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing or replaying a script.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The script is not valid JSON or contains an unknown event
    #[error("invalid replay script: {0}")]
    Parse(#[from] serde_json::Error),

    /// Repainting the canvas failed
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Primary button press at canvas coordinates
    Press { x: i32, y: i32 },
    /// Pointer motion while the button is held
    Motion { x: i32, y: i32 },
    /// Primary button release (commits the in-progress stroke)
    Release,
    /// Secondary button press (cancels the in-progress stroke)
    Cancel,
    /// Pointer left the surface (ends the stroke like a release)
    Leave,
    /// Toggle cone placement mode
    ToggleCone,
    /// Toggle disc placement mode
    ToggleDisc,
    /// Switch the dashed style on or off
    SetDashed { on: bool },
    /// Remove the most recently committed shape
    Undo,
    /// Remove every committed shape
    Clear,
}

/// Parses a script from its JSON text.
pub fn parse_script(json: &str) -> Result<Vec<ScriptEvent>, ReplayError> {
    let events = serde_json::from_str(json)?;
    Ok(events)
}

/// Applies a single event to the session state.
pub fn apply_event(state: &mut SessionState, event: &ScriptEvent) {
    debug!("applying {event:?}");
    match *event {
        ScriptEvent::Press { x, y } => state.on_pointer_press(PointerButton::Left, x, y),
        ScriptEvent::Motion { x, y } => state.on_pointer_motion(x, y),
        ScriptEvent::Release => state.on_pointer_release(PointerButton::Left),
        ScriptEvent::Cancel => state.on_pointer_press(PointerButton::Right, 0, 0),
        ScriptEvent::Leave => state.on_pointer_leave(),
        ScriptEvent::ToggleCone => state.toggle_cone(),
        ScriptEvent::ToggleDisc => state.toggle_disc(),
        ScriptEvent::SetDashed { on } => state.set_dashed(on),
        ScriptEvent::Undo => state.undo(),
        ScriptEvent::Clear => state.clear(),
    }
}

/// Replays a parsed script against the session, repainting the canvas
/// whenever the state reports a change.
///
/// A final repaint runs unconditionally so the surface matches the end
/// state even for scripts that change nothing.
pub fn run_script(
    state: &mut SessionState,
    canvas: &mut Canvas,
    events: &[ScriptEvent],
) -> Result<(), ReplayError> {
    for event in events {
        apply_event(state, event);
        if state.take_redraw() {
            canvas.repaint(&state.frame, state.provisional())?;
        }
    }
    canvas.repaint(&state.frame, state.provisional())?;

    info!(
        "replayed {} events: {} shapes committed, {} strokes drawn",
        events.len(),
        state.frame.len(),
        state.stroke_counter
    );
    Ok(())
}
