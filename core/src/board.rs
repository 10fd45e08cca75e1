use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tile slots, indexed by `(col, row)` with `(0, 0)` at the
/// lower-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Array2<Option<Tile>>,
}

impl Board {
    /// A side length of zero, e.g. from a deserialized config, is raised to one.
    pub fn new(config: GameConfig) -> Self {
        let size = config.size().max(1);
        Self {
            slots: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Builds a board from a square table of values, `0` meaning empty.
    ///
    /// Rows are given top row first, the way [`Board`]'s `Display` prints them.
    pub fn from_rows<const N: usize>(rows: &[[u32; N]]) -> Result<Self> {
        let size: Coord = rows
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self::new(GameConfig::new_unchecked(size));
        if N != rows.len() {
            return Err(GameError::InvalidBoardShape);
        }

        for (i, values) in rows.iter().enumerate() {
            let row = size - 1 - i as Coord;
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::new(value, (col as Coord, row))?)?;
                }
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord {
        self.slots.dim().0 as Coord
    }

    pub fn contains(&self, (col, row): Coord2) -> bool {
        let size = self.size();
        col < size && row < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Tile at canonical coordinates, `None` for an empty slot.
    ///
    /// # Panics
    ///
    /// When `coords` lies outside the board.
    pub fn tile(&self, coords: Coord2) -> Option<Tile> {
        self.view(Side::North).tile(coords)
    }

    /// Read-only view of the board as seen from `side`.
    pub fn view(&self, side: Side) -> BoardView<'_> {
        BoardView { board: self, side }
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn tile_count(&self) -> CellCount {
        self.iter_tiles().count() as CellCount
    }

    pub fn empty_count(&self) -> CellCount {
        mult(self.size(), self.size()) - self.tile_count()
    }

    /// Places `tile` at its own position, which must be empty.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        let coords = self.validate_coords(tile.position())?;
        let slot = &mut self.slots[coords.to_nd_index()];
        if slot.is_some() {
            return Err(GameError::SlotOccupied);
        }
        *slot = Some(tile);
        Ok(())
    }

    /// Moves `tile` to the logical `coords` under `side` and empties its old slot.
    ///
    /// A mergeable tile of equal value at the destination is merged with it,
    /// anything else there is an error. `tile` must be the one currently stored at its
    /// recorded position.
    pub fn move_tile(&mut self, side: Side, coords: Coord2, tile: Tile) -> Result<MoveOutcome> {
        let coords = self.validate_coords(coords)?;
        let source = tile.position();
        if !self.contains(source) || self.slots[source.to_nd_index()] != Some(tile) {
            return Err(GameError::TileNotOnBoard);
        }

        let target = side.to_physical(coords, self.size());
        if target == source {
            return Ok(MoveOutcome::NoChange);
        }

        let outcome = match self.slots[target.to_nd_index()] {
            None => {
                self.slots[target.to_nd_index()] = Some(tile.at(target));
                MoveOutcome::Moved
            }
            Some(resident) if resident.can_merge_with(&tile) => {
                let merged = resident.merged_at(target);
                self.slots[target.to_nd_index()] = Some(merged);
                MoveOutcome::Merged(merged)
            }
            Some(_) => return Err(GameError::SlotOccupied),
        };
        self.slots[source.to_nd_index()] = None;

        Ok(outcome)
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Checks a board that did not come from this crate's constructors, e.g.
    /// one restored from a snapshot.
    pub fn validate(&self) -> Result<()> {
        let (size_x, size_y) = self.slots.dim();
        if size_x != size_y || size_x == 0 || size_x > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }

        for ((x, y), slot) in self.slots.indexed_iter() {
            let Some(tile) = slot else {
                continue;
            };
            if tile.position() != (x as Coord, y as Coord) {
                return Err(GameError::InvalidBoardShape);
            }
            Tile::new(tile.value(), tile.position())?;
        }

        Ok(())
    }

    pub(crate) fn slots(&self) -> &Array2<Option<Tile>> {
        &self.slots
    }
}

/// Prints rows top to bottom, each slot right-justified in four columns.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in (0..size).rev() {
            for col in 0..size {
                match self.tile((col, row)) {
                    Some(tile) => write!(f, "|{:>4}", tile.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// A board seen from one side: logical row `size - 1` is that side's edge.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    side: Side,
}

impl BoardView<'_> {
    pub fn size(&self) -> Coord {
        self.board.size()
    }

    /// # Panics
    ///
    /// When `coords` lies outside the board.
    pub fn tile(&self, coords: Coord2) -> Option<Tile> {
        let size = self.size();
        assert!(
            self.board.contains(coords),
            "coordinates {coords:?} outside a board of size {size}"
        );
        self.board.slots[self.side.to_physical(coords, size).to_nd_index()]
    }

    /// Logical coordinates of `tile` under this view.
    pub fn position_of(&self, tile: &Tile) -> Coord2 {
        self.side.from_physical(tile.position(), self.size())
    }
}
