use alloc::collections::VecDeque;

use crate::*;
pub use random::*;

mod random;

/// Source of the tiles that appear after every tilt that changed the board.
pub trait TileSpawner {
    /// Picks a tile for an empty slot of `board`, `None` when there is no room.
    fn spawn(&mut self, board: &Board) -> Option<Tile>;
}

/// Replays a scripted sequence of tiles, then stops spawning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedTileSpawner {
    tiles: VecDeque<Tile>,
}

impl FixedTileSpawner {
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }
}

impl TileSpawner for FixedTileSpawner {
    fn spawn(&mut self, _board: &Board) -> Option<Tile> {
        self.tiles.pop_front()
    }
}
