//! Uniform random move choice.

use crate::types::Board;
use rand::Rng;

/// Picks one empty cell uniformly at random.
///
/// Returns `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..empty.len());
    Some(empty[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_move_selects_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let board: Board = "XO.|X.O|.X.".parse().unwrap();
        let empty: Vec<usize> = board.empty_cells().collect();

        for _ in 0..100 {
            let index = random_move(&board, &mut rng).unwrap();
            assert!(empty.contains(&index), "Cell {} is not empty", index);
        }
    }

    #[test]
    fn test_random_move_on_full_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_single_cell_left() {
        let mut rng = StdRng::seed_from_u64(1);
        let board: Board = "XOX|OXX|O.O".parse().unwrap();
        assert_eq!(random_move(&board, &mut rng), Some(7));
    }
}
