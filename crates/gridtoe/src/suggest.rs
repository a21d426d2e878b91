//! One-shot move suggestion for a board given on the command line.

use gridtoe_engine::strategy::Search;
use gridtoe_engine::{Board, ConfigError, Difficulty, GameConfig, Player, Strategy, select_move};
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

/// The engine's answer for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggested cell, 1-based. `None` when the game is over.
    #[serde(rename = "move")]
    pub cell: Option<usize>,
    /// Suggested cell, 0-based.
    pub index: Option<usize>,
    /// Evaluation of the board as given.
    pub outcome: String,
    /// Strategy the engine played.
    pub strategy: String,
    /// Minimax score of the move for the suggested side, when searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => writeln!(f, "Suggested move: {} via {}", cell, self.strategy)?,
            None => writeln!(f, "No move: the game is over")?,
        }
        if let Some(score) = self.score {
            writeln!(f, "Score: {score}")?;
        }
        write!(f, "Outcome: {}", self.outcome)
    }
}

/// Suggests a move for `computer`, or for the side to move if `None`.
///
/// # Errors
///
/// Returns [`ConfigError`] if `win_length` does not fit the board.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn suggest(
    board: &mut Board,
    computer: Option<Player>,
    difficulty: Difficulty,
    win_length: Option<usize>,
) -> Result<Suggestion, ConfigError> {
    let grid_size = board.grid_size();
    let config = GameConfig::new(grid_size, win_length.unwrap_or(grid_size), difficulty)?;
    let computer = computer.unwrap_or_else(|| board.side_to_move());
    let outcome = config.evaluate(board);
    let strategy = Strategy::for_config(&config);

    let (index, score) = match strategy {
        _ if outcome.is_over() => (None, None),
        Strategy::Minimax { depth } => {
            let best = Search::new(config.win_length(), computer, depth).best_move(board);
            (best.map(|m| m.index), best.map(|m| m.score))
        }
        Strategy::Random | Strategy::Tactical => (select_move(board, &config, computer), None),
    };
    info!(?index, ?score, %outcome, "Suggestion ready");

    Ok(Suggestion {
        cell: index.map(|i| i + 1),
        index,
        outcome: outcome.to_string(),
        strategy: strategy.to_string(),
        score,
    })
}
