//! Minimax search with alpha-beta pruning.
//!
//! The computer is the maximizing side and its opponent the minimizing
//! side. Terminal positions score [`WIN`], [`LOSS`] or [`DRAW`]; there is
//! no positional heuristic, so a position cut off by the depth limit is
//! scored as a draw.
//!
//! The search works on the caller's board in place. Each candidate mark
//! is held by a [`Placement`] guard and undone when the guard drops.

use super::placement::Placement;
use crate::rules;
use crate::types::{Board, Outcome, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use tracing::{debug, instrument, trace};

/// Score of a position the computer has won.
pub const WIN: i32 = 1;
/// Score of a position the computer has lost.
pub const LOSS: i32 = -1;
/// Score of a drawn or undecided position.
pub const DRAW: i32 = 0;

const INF: i32 = i32::MAX;

/// How far the search looks past each root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SearchDepth {
    /// Stop after this many plies below the root candidate.
    #[display("depth {_0}")]
    Limited(u32),
    /// Search every line to a terminal position.
    #[display("full depth")]
    Unlimited,
}

impl SearchDepth {
    fn is_reached(self, depth: u32) -> bool {
        match self {
            SearchDepth::Limited(max) => depth >= max,
            SearchDepth::Unlimited => false,
        }
    }
}

/// A root move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// Cell index of the move.
    pub index: usize,
    /// Minimax value from the computer's point of view.
    pub score: i32,
}

/// A configured minimax search for one side.
#[derive(Debug, Clone)]
pub struct Search {
    win_length: usize,
    computer: Player,
    depth: SearchDepth,
    nodes: Cell<u64>,
}

impl Search {
    /// Creates a search that plays `computer` and wins with `win_length` in a row.
    #[instrument]
    pub fn new(win_length: usize, computer: Player, depth: SearchDepth) -> Self {
        Self {
            win_length,
            computer,
            depth,
            nodes: Cell::new(0),
        }
    }

    /// Positions visited by the most recent call.
    pub fn nodes(&self) -> u64 {
        self.nodes.get()
    }

    /// Scores every empty cell as a root move, in increasing index order.
    ///
    /// Each root candidate gets a fresh alpha-beta window. The board is
    /// unchanged on return.
    #[instrument(skip(self, board), fields(computer = %self.computer, depth = %self.depth))]
    pub fn score_moves(&self, board: &mut Board) -> Vec<ScoredMove> {
        self.nodes.set(0);
        let mut scored = Vec::new();

        for index in 0..board.len() {
            if !board.is_cell_empty(index) {
                continue;
            }
            let score = {
                let mut placed = Placement::new(board, index, self.computer);
                self.minimax(&mut placed, 0, -INF, INF, false)
            };
            trace!(index, score, "Root candidate scored");
            scored.push(ScoredMove::new(index, score));
        }

        scored
    }

    /// Best root move, keeping the lowest index among equal scores.
    ///
    /// Returns `None` on a full board.
    #[instrument(skip(self, board), fields(computer = %self.computer, depth = %self.depth))]
    pub fn best_move(&self, board: &mut Board) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        let mut best_score = -INF;

        for candidate in self.score_moves(board) {
            if candidate.score > best_score {
                best_score = candidate.score;
                best = Some(candidate);
            }
        }

        debug!(?best, nodes = self.nodes(), "Search finished");
        best
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes.set(self.nodes.get() + 1);

        match rules::evaluate(board.squares(), board.grid_size(), self.win_length) {
            Outcome::Won(player) if player == self.computer => return WIN,
            Outcome::Won(_) => return LOSS,
            Outcome::Draw => return DRAW,
            Outcome::InProgress => {}
        }
        if self.depth.is_reached(depth) {
            return DRAW;
        }

        if maximizing {
            let mut best = -INF;
            for index in 0..board.len() {
                if !board.is_cell_empty(index) {
                    continue;
                }
                let mut placed = Placement::new(board, index, self.computer);
                let score = self.minimax(&mut placed, depth + 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for index in 0..board.len() {
                if !board.is_cell_empty(index) {
                    continue;
                }
                let mut placed = Placement::new(board, index, self.computer.opponent());
                let score = self.minimax(&mut placed, depth + 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("OO.|XX.|...");
        let search = Search::new(3, Player::O, SearchDepth::Unlimited);
        assert_eq!(search.best_move(&mut b), Some(ScoredMove::new(2, WIN)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX|OXX|OXO");
        let search = Search::new(3, Player::O, SearchDepth::Unlimited);
        assert_eq!(search.best_move(&mut b), None);
        assert!(search.score_moves(&mut b).is_empty());
    }

    #[test]
    fn test_empty_board_is_a_draw_and_ties_go_to_lowest_index() {
        let mut b = Board::new(3);
        let search = Search::new(3, Player::X, SearchDepth::Unlimited);
        assert_eq!(search.best_move(&mut b), Some(ScoredMove::new(0, DRAW)));
        assert!(b.is_empty());
    }

    #[test]
    fn test_forced_win_is_scored() {
        // X centre, O edge: X has a forced win.
        let mut b = board(".O.|.X.|...");
        let search = Search::new(3, Player::X, SearchDepth::Unlimited);
        let best = search.best_move(&mut b).unwrap();
        assert_eq!(best, ScoredMove::new(0, WIN));
    }

    #[test]
    fn test_zero_depth_only_sees_immediate_results() {
        let mut b = board(".O.|.X.|...");
        let search = Search::new(3, Player::X, SearchDepth::Limited(0));
        let scores = search.score_moves(&mut b);
        assert!(scores.iter().all(|m| m.score == DRAW));
        assert_eq!(search.best_move(&mut b), Some(ScoredMove::new(0, DRAW)));
    }

    #[test]
    fn test_score_moves_lists_every_empty_cell() {
        let mut b = board("OO.|XX.|...");
        let search = Search::new(3, Player::O, SearchDepth::Unlimited);
        let scores = search.score_moves(&mut b);
        let indices: Vec<usize> = scores.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 5, 6, 7, 8]);
        assert_eq!(scores[0].score, WIN);
        assert_eq!(scores[1].score, DRAW);
        assert!(scores[2..].iter().all(|m| m.score == LOSS));
    }

    #[test]
    fn test_limited_search_visits_fewer_nodes() {
        let mut b = Board::new(3);
        let shallow = Search::new(3, Player::X, SearchDepth::Limited(2));
        let full = Search::new(3, Player::X, SearchDepth::Unlimited);
        shallow.best_move(&mut b);
        full.best_move(&mut b);
        assert!(shallow.nodes() > 0);
        assert!(shallow.nodes() < full.nodes());
        assert!(b.is_empty());
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let mut b = board("X..|.O.|..X");
        let before = b.clone();
        let search = Search::new(3, Player::O, SearchDepth::Limited(4));
        search.best_move(&mut b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_depth_display() {
        assert_eq!(SearchDepth::Limited(4).to_string(), "depth 4");
        assert_eq!(SearchDepth::Unlimited.to_string(), "full depth");
    }
}
