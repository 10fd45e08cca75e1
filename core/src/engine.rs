use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Rules engine of one game: the board, the running score and the terminal
/// state.
///
/// Two engines are equal when their grids, scores, max scores and states
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    score: u32,
    max_score: u32,
    state: EngineState,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config),
            score: 0,
            max_score: 0,
            state: Default::default(),
        }
    }

    /// Resumes a game from an existing board, e.g. a restored snapshot.
    ///
    /// The state is derived from the board; a finished board folds `score`
    /// into `max_score` as if the game had just ended.
    pub fn from_parts(board: Board, score: u32, max_score: u32) -> Result<Self> {
        board.validate()?;
        let mut engine = Self {
            board,
            score,
            max_score,
            state: Default::default(),
        };
        engine.refresh_state();
        Ok(engine)
    }

    /// See [`Board::from_rows`] for the layout of `rows`.
    pub fn from_rows<const N: usize>(
        rows: &[[u32; N]],
        score: u32,
        max_score: u32,
    ) -> Result<Self> {
        Self::from_parts(Board::from_rows(rows)?, score, max_score)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    /// # Panics
    ///
    /// When `coords` lies outside the board.
    pub fn tile(&self, coords: Coord2) -> Option<Tile> {
        self.board.tile(coords)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen at the end of a game during this session.
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Empties the board and resets the score for a new round.
    pub fn clear(&mut self) {
        self.score = 0;
        self.state = EngineState::Active;
        self.board.clear();
    }

    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        self.board.add_tile(tile)?;
        self.refresh_state();
        Ok(())
    }

    /// Slides every tile toward `side`, merging equal neighbours once.
    ///
    /// Each column is processed as seen from `side`, so the board is never
    /// left in a rotated state. A `NoChange` outcome leaves the engine
    /// untouched and means no tile should be spawned.
    pub fn tilt(&mut self, side: Side) -> Result<TiltOutcome> {
        self.tilt_report(side).map(|report| report.outcome)
    }

    /// Same as [`GameEngine::tilt`], also counting merges and points scored.
    pub fn tilt_report(&mut self, side: Side) -> Result<TiltReport> {
        let mut report = TiltReport::default();
        for col in 0..self.board.size() {
            report = report | self.tilt_column(side, col)?;
        }

        self.score = self.score.saturating_add(report.points);
        self.refresh_state();

        if report.outcome.has_update() && self.state == EngineState::Won {
            report.outcome = TiltOutcome::Won;
        }
        log::debug!(
            "tilt {side:?}: {:?}, {} merges, {} points",
            report.outcome,
            report.merges,
            report.points
        );

        Ok(report)
    }

    /// Whether tilting toward `side` would change the board.
    pub fn can_tilt(&self, side: Side) -> bool {
        let view = self.board.view(side);
        let size = view.size();

        (0..size).any(|col| {
            let mut seen_empty = false;
            let mut previous = None;
            for row in (0..size).rev() {
                match view.tile((col, row)) {
                    None => seen_empty = true,
                    Some(tile) => {
                        let merges = previous.is_some_and(|p: Tile| p.can_merge_with(&tile));
                        if seen_empty || merges {
                            return true;
                        }
                        previous = Some(tile);
                    }
                }
            }
            false
        })
    }

    /// Compacts one logical column toward row `size - 1`.
    ///
    /// Tiles are taken nearest-to-the-edge first. A tile moves into the next
    /// free row and absorbs the following tile when both hold the same value;
    /// the merged tile is then done for this tilt.
    fn tilt_column(&mut self, side: Side, col: Coord) -> Result<TiltReport> {
        use TiltOutcome::*;

        let size = self.board.size();
        let view = self.board.view(side);
        let tiles: Vec<Tile> = (0..size)
            .rev()
            .filter_map(|row| view.tile((col, row)))
            .collect();

        let mut report = TiltReport::default();
        let mut row = size;
        let mut tiles = tiles.into_iter().peekable();

        while let Some(lead) = tiles.next() {
            row -= 1;
            let target = (col, row);

            if self.board.move_tile(side, target, lead)?.has_update() {
                report.outcome = report.outcome | Moved;
            }

            if let Some(trailing) = tiles.next_if(|next| lead.can_merge_with(next)) {
                if let MoveOutcome::Merged(merged) = self.board.move_tile(side, target, trailing)? {
                    report.merges += 1;
                    report.points = report.points.saturating_add(merged.value());
                    let column = if merged.is_winning() { Won } else { Moved };
                    report.outcome = report.outcome | column;
                }
            }
        }

        Ok(report)
    }

    fn refresh_state(&mut self) {
        let state = terminal_state(&self.board);
        if state.is_finished() && !self.state.is_finished() {
            self.max_score = self.max_score.max(self.score);
            log::info!(
                "game finished as {state:?}, score {}, max score {}",
                self.score,
                self.max_score
            );
        }
        self.state = state;
    }
}

/// Debug dump: the grid followed by score, max score and whether the game is over.
impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let over = if self.game_over() { "over" } else { "not over" };
        writeln!(f)?;
        writeln!(f, "[")?;
        write!(f, "{}", self.board)?;
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score, self.max_score, over
        )
    }
}
