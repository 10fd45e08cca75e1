use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for slot and tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`, `(0, 0)` being the lower-left corner.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Direction of a tilt, also used as the viewing perspective of a board.
///
/// Under every perspective the logical row `size - 1` is the edge tiles slide
/// toward, so one column algorithm serves all four directions. `North` maps
/// logical coordinates to physical ones unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Maps logical `(col, row)` under this perspective to physical storage
    /// coordinates on a board of side `size`.
    pub fn to_physical(self, (col, row): Coord2, size: Coord) -> Coord2 {
        let last = size - 1;
        match self {
            Self::North => (col, row),
            Self::East => (row, last - col),
            Self::South => (last - col, last - row),
            Self::West => (last - row, col),
        }
    }

    /// Inverse of [`Side::to_physical`].
    pub fn from_physical(self, (x, y): Coord2, size: Coord) -> Coord2 {
        let last = size - 1;
        match self {
            Self::North => (x, y),
            Self::East => (last - y, x),
            Self::South => (last - x, last - y),
            Self::West => (y, last - x),
        }
    }
}

impl Default for Side {
    fn default() -> Self {
        Self::North
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Orthogonal neighbours only, tiles merge along rows and columns.
const DISPLACEMENTS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
