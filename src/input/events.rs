//! Generic pointer event types for cross-frontend compatibility.

/// Pointer button identification.
///
/// Frontend adapters map their native button codes to these generic values
/// for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (draws and places stamps)
    Left,
    /// Secondary button (cancels the in-progress stroke)
    Right,
    /// Middle button (currently unused)
    Middle,
}
