use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Slot is already occupied")]
    SlotOccupied,
    #[error("Tile is not on the board at its recorded position")]
    TileNotOnBoard,
    #[error("Tile value must be a power of two, at least 2")]
    InvalidTileValue,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
