use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod field;
mod generator;
mod tile;
mod types;

/// Smallest playable board axis.
pub const MIN_AXIS: Coord = 5;
/// Largest renderable board axis (two-digit row/column labels).
pub const MAX_AXIS: Coord = 99;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// Validated construction: both axes in `[MIN_AXIS, MAX_AXIS]` and at
    /// least one safe cell left after placing `mines`.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (width, height) = size;
        if !(MIN_AXIS..=MAX_AXIS).contains(&width) || !(MIN_AXIS..=MAX_AXIS).contains(&height) {
            return Err(GameError::InvalidDimension);
        }
        if mines < 1 || mines > area(width, height) - 1 {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self { size, mines })
    }

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_axis_bounds() {
        assert!(GameConfig::new((5, 5), 1).is_ok());
        assert!(GameConfig::new((99, 99), 10).is_ok());
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            GameConfig::new((4, 10), 5),
            Err(GameError::InvalidDimension)
        );
        assert_eq!(
            GameConfig::new((10, 100), 5),
            Err(GameError::InvalidDimension)
        );
    }

    #[test]
    fn rejects_bad_mine_counts() {
        assert_eq!(GameConfig::new((5, 5), 0), Err(GameError::InvalidMineCount));
        assert_eq!(
            GameConfig::new((5, 5), 25),
            Err(GameError::InvalidMineCount)
        );
        // the largest count that still leaves a safe cell
        assert!(GameConfig::new((5, 5), 24).is_ok());
    }

    #[test]
    fn cell_arithmetic() {
        let config = GameConfig::new((10, 12), 30).unwrap();
        assert_eq!(config.total_cells(), 120);
        assert_eq!(config.safe_cells(), 90);
    }
}
