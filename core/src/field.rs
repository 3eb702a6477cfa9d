use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Danger level recorded for mine cells themselves.
pub const MINE_DANGER: u8 = 9;

/// Immutable mine placement plus the danger level of every cell, computed
/// eagerly at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    danger: Array2<u8>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        let dim = mines.dim();
        let bounds = (dim.0 as Coord, dim.1 as Coord);
        let danger = Array2::from_shape_fn(dim, |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if mines[coords.to_nd_index()] {
                MINE_DANGER
            } else {
                neighbors(coords, bounds)
                    .filter(|&pos| mines[pos.to_nd_index()])
                    .count() as u8
            }
        });
        Self {
            mines,
            danger,
            mine_count,
        }
    }

    /// Builds a field with an explicit mine set, mainly for tests and
    /// deterministic replays.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mines[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines[coords.to_nd_index()]
    }

    pub fn danger_level(&self, coords: Coord2) -> u8 {
        self.danger[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 8-mine ring around (3, 3) used across the engine tests.
    const RING: [Coord2; 8] = [
        (2, 2),
        (3, 2),
        (4, 2),
        (2, 3),
        (4, 3),
        (2, 4),
        (3, 4),
        (4, 4),
    ];

    fn ring_field() -> Minefield {
        Minefield::from_mine_coords((5, 5), &RING).unwrap()
    }

    #[test]
    fn mine_coords_round_trip() {
        let field = ring_field();
        assert_eq!(field.size(), (5, 5));
        assert_eq!(field.mine_count(), 8);
        assert_eq!(field.safe_cell_count(), 17);
        for coords in RING {
            assert!(field.contains_mine(coords));
        }
    }

    #[test]
    fn rejects_out_of_bounds_mines() {
        assert_eq!(
            Minefield::from_mine_coords((5, 5), &[(5, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn danger_sentinel_marks_exactly_the_mines() {
        let field = ring_field();
        for x in 0..5 {
            for y in 0..5 {
                let coords = (x, y);
                assert_eq!(
                    field.danger_level(coords) == MINE_DANGER,
                    field.contains_mine(coords),
                    "at {coords:?}"
                );
            }
        }
    }

    #[test]
    fn danger_levels_count_adjacent_mines() {
        let field = ring_field();
        assert_eq!(field.danger_level((0, 0)), 0);
        assert_eq!(field.danger_level((3, 3)), 8);
        assert_eq!(field.danger_level((2, 1)), 2);
        assert_eq!(field.danger_level((1, 1)), 1);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let field = ring_field();
        assert_eq!(field.validate_coords((4, 4)), Ok((4, 4)));
        assert_eq!(field.validate_coords((5, 4)), Err(GameError::InvalidCoords));
        assert_eq!(field.validate_coords((4, 5)), Err(GameError::InvalidCoords));
    }
}
