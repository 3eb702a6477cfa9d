use std::collections::BTreeSet;

use ndarray::Array2;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::{SeedableRng, rng};

use super::*;

/// Uniform placement by rejection sampling: draw random cells and keep the
/// distinct ones until the requested count is reached.
#[derive(Clone, Debug)]
pub struct RandomGenerator<R> {
    rng: R,
}

impl RandomGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rng()))
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinefieldGenerator for RandomGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Minefield {
        let (width, height) = config.size;
        let total_cells = config.total_cells();

        // A validated config always leaves a free cell, but an unchecked one
        // might not, and the sampling loop below would never finish.
        if config.mines >= total_cells {
            log::warn!(
                "minefield is full, requested {} mines for {} cells",
                config.mines,
                total_cells
            );
            return Minefield::from_mine_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut picked: BTreeSet<Coord2> = BTreeSet::new();
        let mut draws = 0u32;
        while (picked.len() as CellCount) < config.mines {
            draws += 1;
            picked.insert((
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            ));
        }
        log::debug!("placed {} mines in {draws} draws", config.mines);

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        for &coords in &picked {
            mines[coords.to_nd_index()] = true;
        }
        Minefield::from_mine_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        let config = GameConfig::new((9, 7), 20).unwrap();
        let field = RandomGenerator::from_seed(42).generate(config);
        assert_eq!(field.size(), (9, 7));
        assert_eq!(field.mine_count(), 20);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::new((20, 15), 60).unwrap();
        let a = RandomGenerator::from_seed(7).generate(config);
        let b = RandomGenerator::from_seed(7).generate(config);
        assert_eq!(a, b);
    }

    #[test]
    fn full_board_falls_back_to_all_mines() {
        let config = GameConfig::new_unchecked((5, 5), 25);
        let field = RandomGenerator::from_seed(1).generate(config);
        assert_eq!(field.mine_count(), 25);
        assert_eq!(field.safe_cell_count(), 0);
    }
}
