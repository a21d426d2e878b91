//! Core domain types for tic-tac-toe on a square grid.

use crate::error::{BoardParseError, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Square board of `grid_size * grid_size` cells in row-major order.
///
/// Serializes as the compact text form accepted by [`FromStr`],
/// e.g. `"XO.|.X.|..O"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    grid_size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Largest supported side length.
    pub const MAX_GRID_SIZE: usize = 32;

    /// Creates an empty board with `grid_size` rows and columns.
    ///
    /// Sizes above [`Board::MAX_GRID_SIZE`] are clamped to it.
    #[instrument]
    pub fn new(grid_size: usize) -> Self {
        let grid_size = if grid_size > Self::MAX_GRID_SIZE {
            warn!(max = Self::MAX_GRID_SIZE, "Grid size clamped");
            Self::MAX_GRID_SIZE
        } else {
            grid_size
        };
        Self {
            grid_size,
            squares: vec![Square::Empty; grid_size * grid_size],
        }
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Checks that no square has been played yet.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Gets the square at the given cell index.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given cell index.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), MoveError> {
        let len = self.squares.len();
        let cell = self
            .squares
            .get_mut(pos)
            .ok_or(MoveError::OutOfBounds { index: pos, len })?;
        *cell = square;
        Ok(())
    }

    /// Swaps in `square` at `pos`, returning what was there.
    ///
    /// Returns `None` and leaves the board untouched when `pos` is out of bounds.
    pub(crate) fn replace(&mut self, pos: usize, square: Square) -> Option<Square> {
        self.squares
            .get_mut(pos)
            .map(|cell| std::mem::replace(cell, square))
    }

    /// Checks if the square at `pos` is empty. Out of bounds is not empty.
    pub fn is_cell_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of empty cells in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// The player whose turn it is, assuming X opened and turns alternated.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Compact single-line form, rows separated by `|`.
    pub fn to_compact(&self) -> String {
        let mut result = String::with_capacity(self.squares.len() + self.grid_size);
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && self.grid_size > 0 && i % self.grid_size == 0 {
                result.push('|');
            }
            result.push(match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            });
        }
        result
    }
}

impl fmt::Display for Board {
    /// Renders the grid with 1-based cell numbers in empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.squares.len().to_string().len();
        for row in 0..self.grid_size {
            if row > 0 {
                let rule = vec!["-".repeat(width); self.grid_size].join("+");
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            for col in 0..self.grid_size {
                let pos = row * self.grid_size + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                write!(f, "{symbol:>width$}")?;
                if col + 1 < self.grid_size {
                    write!(f, "|")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                'x' | 'X' => squares.push(Square::Occupied(Player::X)),
                'o' | 'O' => squares.push(Square::Occupied(Player::O)),
                '.' | '-' | '_' => squares.push(Square::Empty),
                '|' | '/' | ',' => {}
                c if c.is_whitespace() => {}
                found => return Err(BoardParseError::InvalidCell { found }),
            }
        }

        let cells = squares.len();
        let grid_size = (1..=cells)
            .find(|n| n.checked_mul(*n).is_none_or(|area| area >= cells))
            .unwrap_or(0);
        if grid_size < 2 || grid_size.checked_mul(grid_size) != Some(cells) {
            return Err(BoardParseError::NotSquare { cells });
        }
        if grid_size > Self::MAX_GRID_SIZE {
            return Err(BoardParseError::TooLarge { grid_size });
        }

        Ok(Self { grid_size, squares })
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_compact()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No line yet and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// Board is full with no line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// True once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
