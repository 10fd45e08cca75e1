#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use rules::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod rules;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    pub fn new(size: Coord) -> Self {
        Self::new_unchecked(size.clamp(1, Coord::MAX))
    }

    pub const fn classic() -> Self {
        Self::new_unchecked(4)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Merged(Tile),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved | Self::Merged(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TiltOutcome {
    NoChange,
    Moved,
    Won,
}

impl Default for TiltOutcome {
    fn default() -> Self {
        Self::NoChange
    }
}

impl TiltOutcome {
    /// Whether the tilt changed the board, i.e. a new tile should be spawned.
    pub const fn has_update(self) -> bool {
        use TiltOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
        }
    }
}

/// Used to fold per-column results into the outcome of a whole tilt
impl BitOr for TiltOutcome {
    type Output = TiltOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use TiltOutcome::*;
        match (self, rhs) {
            (Won, _) => Won,
            (_, Won) => Won,
            (Moved, _) => Moved,
            (_, Moved) => Moved,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Outcome of a tilt together with what the merges produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TiltReport {
    pub outcome: TiltOutcome,
    pub merges: CellCount,
    pub points: u32,
}

impl BitOr for TiltReport {
    type Output = TiltReport;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            outcome: self.outcome | rhs.outcome,
            merges: self.merges + rhs.merges,
            points: self.points.saturating_add(rhs.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_clamps_zero_size() {
        assert_eq!(GameConfig::new(0).size(), 1);
        assert_eq!(GameConfig::new(6).total_cells(), 36);
        assert_eq!(GameConfig::default(), GameConfig::classic());
    }

    #[test]
    fn tilt_outcomes_fold_toward_strongest() {
        use TiltOutcome::*;

        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(NoChange | Moved, Moved);
        assert_eq!(Moved | Won, Won);
        assert!(!(NoChange | NoChange).has_update());
    }

    #[test]
    fn tilt_reports_sum_merges_and_points() {
        let left = TiltReport {
            outcome: TiltOutcome::Moved,
            merges: 1,
            points: 4,
        };
        let right = TiltReport {
            outcome: TiltOutcome::Won,
            merges: 2,
            points: 2056,
        };

        let folded = TiltReport::default() | left | right;

        assert_eq!(folded.outcome, TiltOutcome::Won);
        assert_eq!(folded.merges, 3);
        assert_eq!(folded.points, 2060);
    }
}
