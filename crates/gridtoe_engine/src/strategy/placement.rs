//! Scoped mark placement used by the search.

use crate::types::{Board, Player, Square};
use std::ops::{Deref, DerefMut};

/// A mark placed on a borrowed board for the lifetime of the guard.
///
/// Dropping the guard restores the cell's previous contents, so every
/// exit from a search frame (including pruning `break`s and early
/// returns) leaves the board as it found it.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Option<Square>,
}

impl<'a> Placement<'a> {
    /// Places `player` at `index`. An out-of-bounds index places nothing.
    pub(crate) fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        let previous = board.replace(index, Square::Occupied(player));
        Self {
            board,
            index,
            previous,
        }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.board.replace(self.index, previous);
        }
    }
}
