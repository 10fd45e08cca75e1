use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Classic spawn policy: a uniformly chosen empty slot gets a 2, or a 4 one
/// time in ten.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub const FOUR_PROBABILITY: f64 = 0.1;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn spawn(&mut self, board: &Board) -> Option<Tile> {
        let free_slots = board.empty_count();
        if free_slots == 0 {
            log::warn!("Board is full, no tile spawned");
            return None;
        }

        let place: usize = self.rng.random_range(0..free_slots).into();
        let ((x, y), _) = board
            .slots()
            .indexed_iter()
            .filter(|(_, slot)| slot.is_none())
            .nth(place)?;
        let value = if self.rng.random_bool(Self::FOUR_PROBABILITY) {
            4
        } else {
            2
        };

        Some(Tile::new_unchecked(value, (x as Coord, y as Coord)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn same_seed_spawns_same_tiles() {
        let board = Board::new(GameConfig::classic());
        let mut a = RandomTileSpawner::new(7);
        let mut b = RandomTileSpawner::new(7);

        let from_a: Vec<_> = (0..16).map(|_| a.spawn(&board)).collect();
        let from_b: Vec<_> = (0..16).map(|_| b.spawn(&board)).collect();

        assert_eq!(from_a, from_b);
    }

    #[test]
    fn spawns_only_twos_and_fours_on_empty_slots() {
        let mut board = Board::new(GameConfig::classic());
        let mut spawner = RandomTileSpawner::new(2048);

        while let Some(tile) = spawner.spawn(&board) {
            assert!(matches!(tile.value(), 2 | 4));
            board.add_tile(tile).unwrap();
        }

        assert_eq!(board.empty_count(), 0);
        assert_eq!(spawner.spawn(&board), None);
    }

    #[test]
    fn fills_the_single_free_slot() {
        let board = Board::from_rows(&[[2, 4], [8, 0]]).unwrap();
        let mut spawner = RandomTileSpawner::new(1);

        let tile = spawner.spawn(&board).unwrap();

        assert_eq!(tile.position(), (1, 0));
    }

    #[test]
    fn fixed_spawner_replays_in_order() {
        let first = Tile::new(2, (0, 0)).unwrap();
        let second = Tile::new(4, (1, 1)).unwrap();
        let board = Board::new(GameConfig::classic());
        let mut spawner = FixedTileSpawner::new([first, second]);

        assert_eq!(spawner.spawn(&board), Some(first));
        assert_eq!(spawner.remaining(), 1);
        assert_eq!(spawner.spawn(&board), Some(second));
        assert_eq!(spawner.spawn(&board), None);
    }
}
