use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Active
    }
}

/// Player-made state of a single cell. The danger level lives in the
/// [`Minefield`], not here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
enum CellMark {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// A single game session: an immutable [`Minefield`] plus the player's
/// revealed/flagged marks and the win/loss status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    minefield: Minefield,
    marks: Array2<CellMark>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: Status,
}

impl Game {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        Self {
            minefield,
            marks: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            status: Status::Active,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub fn mines_remaining(&self) -> i32 {
        i32::from(self.minefield.mine_count()) - i32::from(self.flagged_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.mark_at(coords) == CellMark::Revealed
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.mark_at(coords) == CellMark::Flagged
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    /// Reveals `coords`. A zero-danger cell opens its whole zero-danger
    /// region plus the region's one-cell border; flagged cells are never
    /// opened in the process. Revealing a flagged or already-revealed cell
    /// is a no-op (the driver guards against both before calling in).
    pub fn reveal(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_active()?;

        if self.mark_at(coords) != CellMark::Hidden {
            return Ok(());
        }

        self.reveal_cell(coords);
        if self.minefield.danger_level(coords) == 0 {
            self.flood_fill_from(coords);
        }
        Ok(())
    }

    /// Worklist flood fill seeded with the neighbors of a freshly revealed
    /// zero-danger cell. The mark check doubles as the visited guard: a cell
    /// is revealed at most once, so the queue drains.
    fn flood_fill_from(&mut self, origin: Coord2) {
        let mut queue: VecDeque<Coord2> = self.minefield.iter_neighbors(origin).collect();

        while let Some(coords) = queue.pop_front() {
            if self.mark_at(coords) != CellMark::Hidden {
                continue;
            }
            self.reveal_cell(coords);
            if self.minefield.danger_level(coords) == 0 {
                queue.extend(self.minefield.iter_neighbors(coords));
            }
        }
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        self.marks[coords.to_nd_index()] = CellMark::Revealed;
        self.revealed_count += 1;
    }

    /// Flags a hidden cell or unflags a flagged one; revealed cells are left
    /// alone. Toggling twice restores the previous state.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_active()?;

        match self.mark_at(coords) {
            CellMark::Hidden => {
                self.marks[coords.to_nd_index()] = CellMark::Flagged;
                self.flagged_count += 1;
            }
            CellMark::Flagged => {
                self.marks[coords.to_nd_index()] = CellMark::Hidden;
                self.flagged_count -= 1;
            }
            CellMark::Revealed => {}
        }
        Ok(())
    }

    /// Pure status computation from the current marks. A revealed mine loses
    /// regardless of progress; the game is won once every safe cell is
    /// revealed. A terminal stored status is returned as-is, so the function
    /// is idempotent and never resurrects a finished game.
    pub fn evaluate_status(&self) -> Status {
        if self.status.is_finished() {
            return self.status;
        }

        let mine_revealed = self
            .marks
            .indexed_iter()
            .any(|((x, y), &mark)| {
                mark == CellMark::Revealed && self.minefield.contains_mine((x as Coord, y as Coord))
            });
        if mine_revealed {
            Status::Lost
        } else if self.revealed_count == self.minefield.safe_cell_count() {
            Status::Won
        } else {
            Status::Active
        }
    }

    /// Applies [`Self::evaluate_status`] to the stored status. The driver
    /// calls this once per turn, after the turn's action.
    pub fn update_status(&mut self) -> Status {
        if !self.status.is_finished() {
            let status = self.evaluate_status();
            if status.is_finished() {
                log::debug!("game over: {status:?} after {} reveals", self.revealed_count);
            }
            self.status = status;
        }
        self.status
    }

    /// The renderer-facing view of one cell under the current status: a
    /// finished board shows every danger level, with mines exploded on a
    /// loss and auto-flagged on a win.
    pub fn tile_at(&self, coords: Coord2) -> TileView {
        let mine = self.minefield.contains_mine(coords);
        match self.status {
            Status::Active => match self.mark_at(coords) {
                CellMark::Hidden => TileView::Hidden,
                CellMark::Flagged => TileView::Flagged,
                CellMark::Revealed => TileView::Revealed(self.minefield.danger_level(coords)),
            },
            Status::Lost if mine => TileView::Exploded,
            Status::Won if mine => TileView::AutoFlagged,
            _ => TileView::Revealed(self.minefield.danger_level(coords)),
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameFinished)
        } else {
            Ok(())
        }
    }

    fn mark_at(&self, coords: Coord2) -> CellMark {
        self.marks[coords.to_nd_index()]
    }
}
