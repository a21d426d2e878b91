//! Win detection for any grid size and run length.
//!
//! These functions run at every node of the minimax search, so they
//! carry no tracing spans.

use crate::rules::draw::is_full;
use crate::types::{Outcome, Player, Square};

/// Line directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Locates the first complete line as its owner, origin cell and direction.
///
/// Every cell is tried as a line origin in row-major order, and for
/// each origin the four directions in [`DIRECTIONS`] order. A
/// `win_length` of zero or larger than `grid_size` never matches, nor
/// does a grid whose cell count overflows. Cells beyond `cells.len()`
/// are treated as empty.
fn first_line(
    cells: &[Square],
    grid_size: usize,
    win_length: usize,
) -> Option<(Player, usize, (isize, isize))> {
    if win_length == 0 || win_length > grid_size {
        return None;
    }
    let area = grid_size
        .checked_mul(grid_size)
        .filter(|&n| isize::try_from(n).is_ok())?;

    let size = grid_size as isize;
    let reach = win_length as isize - 1;

    for origin in 0..area.min(cells.len()) {
        let Some(first @ Square::Occupied(player)) = cells.get(origin).copied() else {
            continue;
        };
        let (row, col) = ((origin / grid_size) as isize, (origin % grid_size) as isize);

        for (dr, dc) in DIRECTIONS {
            let (end_row, end_col) = (row + dr * reach, col + dc * reach);
            if end_row < 0 || end_row >= size || end_col < 0 || end_col >= size {
                continue;
            }

            let complete = (1..=reach).all(|step| {
                let i = ((row + dr * step) * size + col + dc * step) as usize;
                cells.get(i).copied() == Some(first)
            });
            if complete {
                return Some((player, origin, (dr, dc)));
            }
        }
    }

    None
}

/// Finds the first complete line of `win_length` identical marks.
///
/// Returns the owner and the indices of the line, scanning in the same
/// order as [`check_winner`].
pub fn winning_line(
    cells: &[Square],
    grid_size: usize,
    win_length: usize,
) -> Option<(Player, Vec<usize>)> {
    let (player, origin, (dr, dc)) = first_line(cells, grid_size, win_length)?;
    let stride = dr * grid_size as isize + dc;
    let line = (0..win_length as isize)
        .map(|step| (origin as isize + step * stride) as usize)
        .collect();
    Some((player, line))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has `win_length` in a row,
/// `None` otherwise.
pub fn check_winner(cells: &[Square], grid_size: usize, win_length: usize) -> Option<Player> {
    first_line(cells, grid_size, win_length).map(|(player, _, _)| player)
}

/// Evaluates a flattened board.
///
/// A completed line wins. Otherwise a board with no empty cell is a
/// draw, and anything else is still in progress.
pub fn evaluate(cells: &[Square], grid_size: usize, win_length: usize) -> Outcome {
    if let Some(player) = check_winner(cells, grid_size, win_length) {
        Outcome::Won(player)
    } else if is_full(cells) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_winner(board.squares(), 3, 3), None);
        assert_eq!(evaluate(board.squares(), 3, 3), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board("XXX|OO.|...");
        assert_eq!(evaluate(b.squares(), 3, 3), Outcome::Won(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let b = board("XO.|XO.|.O.");
        assert_eq!(evaluate(b.squares(), 3, 3), Outcome::Won(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let b = board("O.X|.OX|..O");
        assert_eq!(evaluate(b.squares(), 3, 3), Outcome::Won(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let b = board("O.X|.XO|X..");
        assert_eq!(evaluate(b.squares(), 3, 3), Outcome::Won(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board("XX.|...|...");
        assert_eq!(evaluate(b.squares(), 3, 3), Outcome::InProgress);
    }

    #[test]
    fn test_lines_do_not_wrap_around_rows() {
        // Cells 2, 3, 4 are consecutive in memory but span two rows.
        let b = board("..X|XX.|...");
        assert_eq!(check_winner(b.squares(), 3, 3), None);
        // Cells 4, 7, 10 are three apart but 4 and 7 sit on the same row.
        let b = board("....|X..X|..X.|....");
        assert_eq!(check_winner(b.squares(), 4, 3), None);
    }

    #[test]
    fn test_shorter_run_on_larger_grid() {
        let b = board("....|.O..|..O.|...O");
        assert_eq!(evaluate(b.squares(), 4, 3), Outcome::Won(Player::O));
        assert_eq!(evaluate(b.squares(), 4, 4), Outcome::InProgress);
    }

    #[test]
    fn test_win_length_larger_than_grid_never_wins() {
        let b = board("XXX|XXX|XXX");
        assert_eq!(check_winner(b.squares(), 3, 4), None);
        assert_eq!(evaluate(b.squares(), 3, 4), Outcome::Draw);
        assert_eq!(evaluate(Board::new(3).squares(), 3, 4), Outcome::InProgress);
    }

    #[test]
    fn test_zero_win_length_never_wins() {
        let b = board("XXX|...|...");
        assert_eq!(evaluate(b.squares(), 3, 0), Outcome::InProgress);
    }

    #[test]
    fn test_short_cell_slice_is_bounds_checked() {
        let b = board("XX|XX");
        // Claiming a 3x3 grid over two cells must not panic.
        assert_eq!(check_winner(&b.squares()[..2], 3, 3), None);
        assert_eq!(check_winner(&b.squares()[..2], 2, 2), Some(Player::X));
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let b = board("OX.|OX.|.X.");
        assert_eq!(winning_line(b.squares(), 3, 3), Some((Player::X, vec![1, 4, 7])));
        assert_eq!(winning_line(Board::new(3).squares(), 3, 3), None);
    }

    #[test]
    fn test_winning_line_agrees_with_check_winner() {
        for s in ["O.X|.XO|X..", "XO.|XO.|.O.", "XXX|OOO|...", "XOX|OXO|OXO"] {
            let b = board(s);
            let line = winning_line(b.squares(), 3, 3);
            assert_eq!(line.as_ref().map(|(p, _)| *p), check_winner(b.squares(), 3, 3));
        }
        assert_eq!(
            winning_line(board("O.X|.XO|X..").squares(), 3, 3),
            Some((Player::X, vec![2, 4, 6]))
        );
        let b = board("....|.O..|..O.|...O");
        assert_eq!(winning_line(b.squares(), 4, 3), Some((Player::O, vec![5, 10, 15])));
    }

    #[test]
    fn test_overflowing_grid_size_never_wins() {
        let b = board("XXX|XXX|XXX");
        assert_eq!(check_winner(b.squares(), usize::MAX, 3), None);
        assert_eq!(winning_line(b.squares(), usize::MAX, 3), None);
    }

    #[test]
    fn test_evaluate_is_idempotent_and_pure() {
        let b = board("XOX|OXO|...");
        let before = b.clone();
        let first = evaluate(b.squares(), 3, 3);
        let second = evaluate(b.squares(), 3, 3);
        assert_eq!(first, second);
        assert_eq!(b, before);
    }
}
