//! Error types for the engine.

use crate::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error that can occur when applying a move to a board or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell index lies outside the board.
    #[display("Cell {index} is out of bounds (board has {len} cells)")]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// Requested cell index.
        index: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the computer is to play.
    #[display("It's not your turn: the computer plays {computer}")]
    NotYourTurn {
        /// Mark played by the computer.
        computer: Player,
    },

    /// The computer was asked to move when it is not its turn.
    #[display("It's not the computer's turn")]
    NotComputerTurn,
}

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {found:?} in board")]
    InvalidCell {
        /// The offending character.
        found: char,
    },

    /// The number of cells does not form a square grid of side 2 or more.
    #[display("Board has {cells} cells, expected a square grid of at least 2x2")]
    NotSquare {
        /// Number of cells parsed.
        cells: usize,
    },

    /// The grid is wider than the engine supports.
    #[display("Board is {grid_size}x{grid_size}, larger than supported")]
    TooLarge {
        /// Side length of the parsed grid.
        grid_size: usize,
    },
}
