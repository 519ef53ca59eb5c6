//! Tile spawning - the game's only source of randomness.
//!
//! A new tile lands on an empty cell chosen uniformly at random. Its value is
//! decided by an independent draw: 4 with probability
//! [`SPAWN_FOUR_PROBABILITY`], 2 otherwise.
//!
//! The RNG is passed in so games can be replayed from a seed.

use rand::Rng;

use crate::board::Board;
use crate::types::{Pos, SPAWN_FOUR_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// Draw the value of a freshly spawned tile.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Place one random tile on an empty cell.
///
/// Returns where the tile landed and its value, or `None` when the board is
/// full (the board is left untouched).
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(Pos, u32)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let pos = empty[rng.gen_range(0..empty.len())];
    let value = random_tile_value(rng);
    board.set(pos.0, pos.1, value);
    Some((pos, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_on_full_board_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::from_rows([[2; 4]; 4]);
        let before = board;
        assert_eq!(spawn_tile(&mut board, &mut rng), None);
        assert_eq!(board, before);
    }

    #[test]
    fn spawn_fills_the_only_hole() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::from_rows([[2; 4], [2; 4], [2, 2, 0, 2], [2; 4]]);
        let (pos, value) = spawn_tile(&mut board, &mut rng).unwrap();
        assert_eq!(pos, (2, 2));
        assert!(value == 2 || value == 4);
        assert!(board.is_full());
    }

    #[test]
    fn spawn_never_overwrites_tiles() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let mut board = Board::from_rows([[8, 0, 16, 0], [0, 32, 0, 64], [0; 4], [128, 0, 0, 0]]);
            let before = board;
            let (pos, _) = spawn_tile(&mut board, &mut rng).unwrap();
            assert_eq!(before.get(pos.0, pos.1), Some(0));
            assert_eq!(board.count_tiles(), before.count_tiles() + 1);
        }
    }

    #[test]
    fn four_is_rare() {
        let mut rng = StdRng::seed_from_u64(2048);
        let n = 10_000;
        let fours = (0..n)
            .filter(|_| random_tile_value(&mut rng) == SPAWN_HIGH_VALUE)
            .count();
        // ~1000 expected.
        assert!(fours > n / 20 && fours < n / 6, "fours = {fours}");
    }

    #[test]
    fn empty_cells_are_picked_uniformly() {
        let mut rng = StdRng::seed_from_u64(31337);
        let mut hits = [0usize; 16];
        for _ in 0..16_000 {
            let mut board = Board::new();
            let ((r, c), _) = spawn_tile(&mut board, &mut rng).unwrap();
            hits[r * 4 + c] += 1;
        }
        for (i, &h) in hits.iter().enumerate() {
            assert!(h > 700 && h < 1300, "cell {i} hit {h} times");
        }
    }
}
