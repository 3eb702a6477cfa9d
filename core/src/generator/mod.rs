use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out the mines of a fresh game.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}
