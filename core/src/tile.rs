use serde::{Deserialize, Serialize};

/// Per-cell visual state handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    /// Unrevealed, unflagged cell.
    Hidden,
    /// Player-placed flag.
    Flagged,
    /// Revealed cell with its danger level.
    Revealed(u8),
    /// Mine shown after a loss.
    Exploded,
    /// Mine flagged automatically after a win.
    AutoFlagged,
}

impl TileView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
