//! One-move lookahead: win if possible, otherwise block, otherwise random.

use super::placement::Placement;
use super::random::random_move;
use crate::types::{Board, Outcome, Player};
use rand::Rng;

/// First empty cell (by index) where `player` would complete a line.
pub fn winning_cell(board: &mut Board, win_length: usize, player: Player) -> Option<usize> {
    (0..board.len()).find(|&index| {
        if !board.is_cell_empty(index) {
            return false;
        }
        let placed = Placement::new(board, index, player);
        placed.outcome(win_length) == Outcome::Won(player)
    })
}

/// Takes a winning cell for `computer`, else blocks the opponent's, else plays randomly.
pub fn tactical_move<R: Rng + ?Sized>(
    board: &mut Board,
    win_length: usize,
    computer: Player,
    rng: &mut R,
) -> Option<usize> {
    winning_cell(board, win_length, computer)
        .or_else(|| winning_cell(board, win_length, computer.opponent()))
        .or_else(|| random_move(board, rng))
}
