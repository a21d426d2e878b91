//! Computer move selection.
//!
//! Each [`Difficulty`] maps to one [`Strategy`] variant, and
//! [`select_move`] dispatches on it. Only the classic 3x3 grid gets the
//! stronger strategies: any other grid size plays [`Strategy::Random`]
//! whatever difficulty was configured.

mod minimax;
mod placement;
mod random;
mod tactical;

pub use minimax::{DRAW, LOSS, ScoredMove, Search, SearchDepth, WIN};
pub use random::random_move;
pub use tactical::{tactical_move, winning_cell};

use crate::config::{Difficulty, GameConfig};
use crate::types::{Board, Player};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Plies searched below each root candidate at [`Difficulty::Hard`].
pub const HARD_SEARCH_DEPTH: u32 = 4;

/// How the computer picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform random empty cell.
    #[display("random")]
    Random,
    /// Win in one, else block in one, else random.
    #[display("win-or-block")]
    Tactical,
    /// Minimax with alpha-beta pruning.
    #[display("minimax ({depth})")]
    Minimax {
        /// Search horizon.
        depth: SearchDepth,
    },
}

impl Strategy {
    /// Strategy a difficulty asks for on the classic grid.
    #[instrument]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Tactical,
            Difficulty::Hard => Strategy::Minimax {
                depth: SearchDepth::Limited(HARD_SEARCH_DEPTH),
            },
            Difficulty::Unbeatable => Strategy::Minimax {
                depth: SearchDepth::Unlimited,
            },
        }
    }

    /// Strategy actually played for `config`.
    ///
    /// Grids other than 3x3 always get [`Strategy::Random`].
    #[instrument]
    pub fn for_config(config: &GameConfig) -> Self {
        let requested = Self::for_difficulty(config.difficulty());
        if config.is_classic() || requested == Strategy::Random {
            requested
        } else {
            debug!(
                grid_size = config.grid_size(),
                difficulty = %config.difficulty(),
                "Stronger strategies need a 3x3 grid, playing randomly"
            );
            Strategy::Random
        }
    }

    /// True when `config` asked for more than it gets.
    pub fn is_downgraded(config: &GameConfig) -> bool {
        Self::for_config(config) != Self::for_difficulty(config.difficulty())
    }

    /// Picks a move for `computer`. Returns `None` only on a full board.
    ///
    /// The board is mutated during search and restored before returning.
    #[instrument(skip(self, board, rng), fields(strategy = %self, computer = %computer))]
    pub fn select<R: Rng + ?Sized>(
        self,
        board: &mut Board,
        win_length: usize,
        computer: Player,
        rng: &mut R,
    ) -> Option<usize> {
        if board.is_full() {
            debug!("Board is full, no move");
            return None;
        }

        let choice = match self {
            Strategy::Random => random_move(board, rng),
            Strategy::Tactical => tactical_move(board, win_length, computer, rng),
            Strategy::Minimax { depth } => Search::new(win_length, computer, depth)
                .best_move(board)
                .map(|best| best.index)
                .or_else(|| random_move(board, rng)),
        };

        debug!(?choice, "Move selected");
        choice
    }
}

/// Picks the computer's next move using the thread-local RNG.
///
/// See [`select_move_with_rng`].
pub fn select_move(board: &mut Board, config: &GameConfig, computer: Player) -> Option<usize> {
    select_move_with_rng(board, config, computer, &mut rand::rng())
}

/// Picks the computer's next move.
///
/// The strategy comes from [`Strategy::for_config`]; a board whose size
/// differs from the classic grid also plays randomly. Returns `None` only
/// when the board is full. From the caller's view the board is never
/// modified; applying the returned move is the caller's job.
#[instrument(skip(board, rng), fields(grid_size = board.grid_size()))]
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    computer: Player,
    rng: &mut R,
) -> Option<usize> {
    let strategy = if board.grid_size() == GameConfig::CLASSIC_SIZE {
        Strategy::for_config(config)
    } else {
        Strategy::Random
    };
    strategy.select(board, config.win_length(), computer, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_mapping() {
        assert_eq!(Strategy::for_difficulty(Difficulty::Easy), Strategy::Random);
        assert_eq!(Strategy::for_difficulty(Difficulty::Medium), Strategy::Tactical);
        assert_eq!(
            Strategy::for_difficulty(Difficulty::Hard),
            Strategy::Minimax {
                depth: SearchDepth::Limited(4)
            }
        );
        assert_eq!(
            Strategy::for_difficulty(Difficulty::Unbeatable),
            Strategy::Minimax {
                depth: SearchDepth::Unlimited
            }
        );
    }

    #[test]
    fn test_larger_grids_downgrade_to_random() {
        for difficulty in Difficulty::iter() {
            let config = GameConfig::new(4, 3, difficulty).unwrap();
            assert_eq!(Strategy::for_config(&config), Strategy::Random);
            assert_eq!(
                Strategy::is_downgraded(&config),
                difficulty != Difficulty::Easy
            );
        }
        assert!(!Strategy::is_downgraded(&GameConfig::classic(Difficulty::Hard)));
    }

    #[test]
    fn test_full_board_returns_none_for_every_difficulty() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board: Board = "XOX|OXX|OXO".parse().unwrap();
        for difficulty in Difficulty::iter() {
            let config = GameConfig::classic(difficulty);
            assert_eq!(select_move_with_rng(&mut board, &config, Player::O, &mut rng), None);
        }
    }

    #[test]
    fn test_mismatched_board_plays_randomly() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::new(5);
        let config = GameConfig::classic(Difficulty::Unbeatable);
        let index = select_move_with_rng(&mut board, &config, Player::O, &mut rng).unwrap();
        assert!(index < 25);
        assert!(board.is_empty());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Random.to_string(), "random");
        assert_eq!(
            Strategy::for_difficulty(Difficulty::Hard).to_string(),
            "minimax (depth 4)"
        );
    }
}
