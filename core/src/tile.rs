use serde::{Deserialize, Serialize};

use crate::*;

/// Value of the tile that ends the game as a win.
pub const WIN_VALUE: u32 = 2048;

/// Largest value a tile can hold; tiles of this value no longer merge.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// A numbered tile resting in one slot of the board.
///
/// Tiles are never changed in place: moving produces a copy at the new
/// position and merging replaces two tiles with one of double value. The
/// position is always the canonical (`Side::North`) one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    position: Coord2,
}

impl Tile {
    pub fn new(value: u32, position: Coord2) -> Result<Self> {
        if value >= 2 && value.is_power_of_two() {
            Ok(Self::new_unchecked(value, position))
        } else {
            Err(GameError::InvalidTileValue)
        }
    }

    pub(crate) const fn new_unchecked(value: u32, position: Coord2) -> Self {
        Self { value, position }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn is_winning(&self) -> bool {
        self.value == WIN_VALUE
    }

    /// Whether `self` and `other` combine into one tile of double value.
    pub const fn can_merge_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_TILE_VALUE
    }

    pub(crate) const fn at(self, position: Coord2) -> Self {
        Self::new_unchecked(self.value, position)
    }

    /// Only valid when [`Tile::can_merge_with`] allowed the merge.
    pub(crate) const fn merged_at(self, position: Coord2) -> Self {
        Self::new_unchecked(self.value * 2, position)
    }
}
