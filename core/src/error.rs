use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be between 5 and 99")]
    InvalidDimension,
    #[error("Mine count must be at least 1 and leave one safe cell")]
    InvalidMineCount,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already finished, no new moves are accepted")]
    GameFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
