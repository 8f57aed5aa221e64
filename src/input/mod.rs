//! Input handling and interaction state machine.
//!
//! This module translates frontend pointer events into drawing actions.
//! It maintains the exclusive interaction mode (freehand vs. stamp
//! placement), records the in-progress stroke, and owns the committed
//! shape log together with the undo entry point.

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::PointerButton;
pub use mode::Mode;
pub use state::{DrawingPhase, SessionState};
