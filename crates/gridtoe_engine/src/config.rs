//! Per-game configuration: grid size, run length and difficulty.

use crate::error::ConfigError;
use crate::rules;
use crate::types::{Board, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Computer opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random moves.
    Easy,
    /// Wins or blocks one-move threats, otherwise random.
    Medium,
    /// Minimax limited to a shallow horizon.
    Hard,
    /// Full-depth minimax.
    #[default]
    Unbeatable,
}

impl Difficulty {
    /// Returns the display label for this difficulty.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unbeatable => "Unbeatable",
        }
    }
}

/// Unvalidated form used while deserializing.
#[derive(Debug, Deserialize)]
struct RawGameConfig {
    grid_size: usize,
    win_length: usize,
    #[serde(default)]
    difficulty: Difficulty,
}

/// Settings for one game. Immutable once the game starts.
///
/// Construction always goes through [`GameConfig::new`], including
/// deserialization, so a held value satisfies
/// `2 <= grid_size` and `1 <= win_length <= grid_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Rows and columns of the square grid.
    #[getter(copy)]
    grid_size: usize,

    /// Marks in a row needed to win.
    #[getter(copy)]
    win_length: usize,

    /// Computer opponent strength.
    #[getter(copy)]
    difficulty: Difficulty,
}

impl GameConfig {
    /// Grid size of the classic game.
    pub const CLASSIC_SIZE: usize = 3;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `grid_size` is outside
    /// `2..=Board::MAX_GRID_SIZE`, `win_length == 0` or
    /// `win_length > grid_size`.
    #[instrument]
    pub fn new(
        grid_size: usize,
        win_length: usize,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        if grid_size < 2 {
            return Err(ConfigError::new(format!(
                "grid size must be at least 2, got {grid_size}"
            )));
        }
        if grid_size > Board::MAX_GRID_SIZE {
            return Err(ConfigError::new(format!(
                "grid size must be at most {}, got {grid_size}",
                Board::MAX_GRID_SIZE
            )));
        }
        if win_length == 0 {
            return Err(ConfigError::new("win length must be at least 1"));
        }
        if win_length > grid_size {
            return Err(ConfigError::new(format!(
                "win length {win_length} exceeds grid size {grid_size}"
            )));
        }

        debug!(grid_size, win_length, %difficulty, "Game config accepted");
        Ok(Self {
            grid_size,
            win_length,
            difficulty,
        })
    }

    /// Classic 3x3, three-in-a-row game at the given difficulty.
    #[instrument]
    pub fn classic(difficulty: Difficulty) -> Self {
        Self {
            grid_size: Self::CLASSIC_SIZE,
            win_length: Self::CLASSIC_SIZE,
            difficulty,
        }
    }

    /// True for the 3x3 grid, the only size the stronger strategies support.
    pub fn is_classic(&self) -> bool {
        self.grid_size == Self::CLASSIC_SIZE
    }

    /// Empty board sized for this configuration.
    pub fn new_board(&self) -> Board {
        Board::new(self.grid_size)
    }

    /// Evaluates `board` with this configuration's run length.
    pub fn evaluate(&self, board: &Board) -> Outcome {
        rules::evaluate(board.squares(), self.grid_size, self.win_length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic(Difficulty::default())
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.grid_size, raw.win_length, raw.difficulty)
    }
}

impl Board {
    /// Evaluates this board for the given run length.
    pub fn outcome(&self, win_length: usize) -> Outcome {
        rules::evaluate(self.squares(), self.grid_size(), win_length)
    }
}
