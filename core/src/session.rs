use crate::*;

/// What just changed in a [`GameSession`], passed to its change callback so a
/// view layer can redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateChange {
    Cleared,
    TileAdded(Tile),
    Tilted(Side),
}

/// The game loop around an engine: spawns tiles after changing tilts and
/// reports every state change to `on_change`.
pub struct GameSession<S, F> {
    engine: GameEngine,
    spawner: S,
    on_change: F,
}

impl<S, F> GameSession<S, F>
where
    S: TileSpawner,
    F: FnMut(&GameEngine, StateChange),
{
    pub fn new(config: GameConfig, spawner: S, on_change: F) -> Self {
        Self::with_engine(GameEngine::new(config), spawner, on_change)
    }

    pub fn with_engine(engine: GameEngine, spawner: S, on_change: F) -> Self {
        Self {
            engine,
            spawner,
            on_change,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Clears the board and places the two opening tiles.
    pub fn start_round(&mut self) -> Result<()> {
        self.engine.clear();
        (self.on_change)(&self.engine, StateChange::Cleared);

        for _ in 0..2 {
            self.spawn()?;
        }
        Ok(())
    }

    /// Tilts toward `side`; only a tilt that changed the board gets a new tile.
    pub fn play(&mut self, side: Side) -> Result<TiltOutcome> {
        let outcome = self.engine.tilt(side)?;
        if outcome.has_update() {
            (self.on_change)(&self.engine, StateChange::Tilted(side));
            self.spawn()?;
        }
        Ok(outcome)
    }

    fn spawn(&mut self) -> Result<Option<Tile>> {
        let Some(tile) = self.spawner.spawn(self.engine.board()) else {
            return Ok(None);
        };

        self.engine.add_tile(tile)?;
        (self.on_change)(&self.engine, StateChange::TileAdded(tile));
        Ok(Some(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn tile(value: u32, position: Coord2) -> Tile {
        Tile::new(value, position).unwrap()
    }

    #[test]
    fn start_round_clears_then_spawns_two_tiles() {
        let spawner = FixedTileSpawner::new([tile(2, (0, 0)), tile(4, (3, 3))]);
        let mut changes = Vec::new();

        let engine = {
            let mut session = GameSession::new(GameConfig::classic(), spawner, |_, change| {
                changes.push(change)
            });
            session.start_round().unwrap();
            session.into_engine()
        };

        assert_eq!(
            changes,
            vec![
                StateChange::Cleared,
                StateChange::TileAdded(tile(2, (0, 0))),
                StateChange::TileAdded(tile(4, (3, 3))),
            ]
        );
        assert_eq!(engine.board().tile_count(), 2);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn changing_tilt_notifies_and_spawns() {
        let engine = GameEngine::from_rows(&[[0, 0], [2, 2]], 0, 0).unwrap();
        let spawner = FixedTileSpawner::new([tile(2, (1, 1))]);
        let mut changes = Vec::new();

        let engine = {
            let mut session =
                GameSession::with_engine(engine, spawner, |current: &GameEngine, change| {
                    changes.push((change, current.score()))
                });
            assert_eq!(session.play(Side::West).unwrap(), TiltOutcome::Moved);
            session.into_engine()
        };

        assert_eq!(
            changes,
            vec![
                (StateChange::Tilted(Side::West), 4),
                (StateChange::TileAdded(tile(2, (1, 1))), 4),
            ]
        );
        assert_eq!(engine.tile((0, 0)).map(|t| t.value()), Some(4));
        assert_eq!(engine.tile((1, 1)).map(|t| t.value()), Some(2));
    }

    #[test]
    fn no_op_tilt_neither_notifies_nor_spawns() {
        let engine = GameEngine::from_rows(&[[0, 0], [2, 4]], 0, 0).unwrap();
        let spawner = FixedTileSpawner::new([tile(2, (1, 1))]);
        let mut notified = 0;

        let engine = {
            let mut session = GameSession::with_engine(engine, spawner, |_, _| notified += 1);
            assert_eq!(session.play(Side::South).unwrap(), TiltOutcome::NoChange);
            session.into_engine()
        };

        assert_eq!(notified, 0);
        assert_eq!(engine.board().tile_count(), 2);
    }

    #[test]
    fn spawner_conflict_is_reported() {
        let spawner = FixedTileSpawner::new([tile(2, (0, 0)), tile(2, (0, 0))]);
        let mut session = GameSession::new(GameConfig::classic(), spawner, |_, _| {});

        assert_eq!(session.start_round(), Err(GameError::SlotOccupied));
    }

    #[test]
    fn random_round_plays_until_finished() {
        let mut session =
            GameSession::new(GameConfig::classic(), RandomTileSpawner::new(42), |_, _| {});
        session.start_round().unwrap();

        let mut turns = 0;
        while !session.engine().game_over() && turns < 100_000 {
            let side = Side::ALL[turns % 4];
            session.play(side).unwrap();
            turns += 1;
        }

        let engine = session.engine();
        assert!(engine.game_over());
        assert!(engine.max_score() >= engine.score());
    }
}
