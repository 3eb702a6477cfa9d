/// Single coordinate axis used for board widths, heights, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(column, row)`, 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(width: Coord, height: Coord) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The in-bounds 8-way neighbors of `center` on a grid of size `bounds`,
/// in displacement-table order. Callers should only rely on membership.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Coord2 = (7, 5);

    #[test]
    fn corner_cells_have_three_neighbors() {
        for corner in [(0, 0), (6, 0), (0, 4), (6, 4)] {
            assert_eq!(neighbors(corner, BOUNDS).count(), 3, "corner {corner:?}");
        }
    }

    #[test]
    fn edge_cells_have_five_neighbors() {
        for edge in [(3, 0), (0, 2), (6, 2), (3, 4)] {
            assert_eq!(neighbors(edge, BOUNDS).count(), 5, "edge {edge:?}");
        }
    }

    #[test]
    fn interior_cells_have_eight_neighbors() {
        assert_eq!(neighbors((3, 2), BOUNDS).count(), 8);
    }

    #[test]
    fn neighbors_are_in_bounds_and_adjacent() {
        let center = (6, 0);
        for (x, y) in neighbors(center, BOUNDS) {
            assert!(x < BOUNDS.0 && y < BOUNDS.1);
            let dx = (x as i16 - center.0 as i16).abs();
            let dy = (y as i16 - center.1 as i16).abs();
            assert_eq!(dx.max(dy), 1, "({x}, {y}) is not adjacent to {center:?}");
        }
    }
}
