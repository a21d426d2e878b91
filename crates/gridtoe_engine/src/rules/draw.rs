//! Draw detection logic.

use crate::types::Square;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(cells: &[Square]) -> bool {
    cells.iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate;
    use super::*;
    use crate::types::{Board, Outcome, Player};

    fn is_draw(board: &Board) -> bool {
        evaluate(board.squares(), board.grid_size(), 3) == Outcome::Draw
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3);
        assert!(!is_full(board.squares()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(board.squares()));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XXX|XXX|XXX".parse().unwrap();
        assert!(is_full(board.squares()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX|OOX|OXO".parse().unwrap();
        assert!(is_full(board.squares()));
        assert!(!is_draw(&board));
    }
}
