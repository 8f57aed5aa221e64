//! Interaction mode selection.

/// Exclusive interaction mode governing how a pointer press is interpreted.
///
/// Exactly one mode is active at any time. The placement modes are
/// single-shot: placing a stamp reverts to [`Mode::Freehand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pointer drags record freehand strokes (initial state)
    #[default]
    Freehand,
    /// Next pointer press places a cone stamp
    PlaceCone,
    /// Next pointer press places a disc stamp
    PlaceDisc,
}

impl Mode {
    /// Toggles cone placement. Activating it forces disc placement off.
    pub fn toggle_cone(self) -> Mode {
        match self {
            Mode::PlaceCone => Mode::Freehand,
            _ => Mode::PlaceCone,
        }
    }

    /// Toggles disc placement. Activating it forces cone placement off.
    pub fn toggle_disc(self) -> Mode {
        match self {
            Mode::PlaceDisc => Mode::Freehand,
            _ => Mode::PlaceDisc,
        }
    }
}
