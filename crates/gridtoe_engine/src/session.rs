//! Game session state owned by the front end.

use crate::config::GameConfig;
use crate::error::MoveError;
use crate::strategy::select_move_with_rng;
use crate::types::{Board, Outcome, Player, Square};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans alternate at the same terminal.
    HumanVsHuman,
    /// A human plays against the engine.
    HumanVsComputer {
        /// Mark played by the engine.
        computer: Player,
    },
}

impl GameMode {
    /// Human opens as X, the computer answers as O.
    pub fn against_computer() -> Self {
        GameMode::HumanVsComputer {
            computer: Player::O,
        }
    }

    /// The computer's mark, if one is playing.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::against_computer()
    }
}

/// Results accumulated across games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("X wins: {x_wins}  O wins: {o_wins}  Draws: {draws}")]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// One table: configuration, mode, the board in play and the running tally.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    mode: GameMode,
    board: Board,
    to_move: Player,
    history: Vec<usize>,
    tally: Tally,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new(config: GameConfig, mode: GameMode) -> Self {
        info!("Creating new game session");
        Self {
            config,
            mode,
            board: config.new_board(),
            to_move: Player::X,
            history: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cells played this game, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Results of finished games.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        self.config.evaluate(&self.board)
    }

    /// True until the current game is won or drawn.
    pub fn is_active(&self) -> bool {
        !self.outcome().is_over()
    }

    /// True when the engine should play the next move.
    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.mode.computer() == Some(self.to_move)
    }

    /// Plays a human move at `index` for the side to move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, it is the computer's turn, or the cell
    /// is out of bounds or occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if let Some(computer) = self.mode.computer()
            && computer == self.to_move
        {
            warn!(index, "Human tried to move on the computer's turn");
            return Err(MoveError::NotYourTurn { computer });
        }
        self.apply(index)
    }

    /// Lets the engine play its move using the thread-local RNG.
    ///
    /// Returns the cell played and the resulting outcome.
    pub fn computer_move(&mut self) -> Result<(usize, Outcome), MoveError> {
        self.computer_move_with_rng(&mut rand::rng())
    }

    /// Lets the engine play its move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, or if it is not the computer's turn.
    #[instrument(skip(self, rng), fields(difficulty = %self.config.difficulty()))]
    pub fn computer_move_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, Outcome), MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        let computer = match self.mode.computer() {
            Some(computer) if computer == self.to_move => computer,
            _ => return Err(MoveError::NotComputerTurn),
        };

        let index = select_move_with_rng(&mut self.board, &self.config, computer, rng)
            .ok_or(MoveError::GameOver)?;
        let outcome = self.apply(index)?;
        Ok((index, outcome))
    }

    /// Clears the board for a new game. The tally is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = self.config.new_board();
        self.to_move = Player::X;
        self.history.clear();
        debug!("Board cleared");
    }

    /// Text describing whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        match (self.outcome(), self.mode.computer()) {
            (Outcome::Draw, _) => "You both tied!".to_string(),
            (Outcome::Won(winner), Some(computer)) if winner == computer => {
                "AI Wins as Expected!".to_string()
            }
            (Outcome::Won(winner), _) => format!("Player {winner} is the Winner!"),
            (Outcome::InProgress, None) => format!("Play Player {}", self.to_move),
            (Outcome::InProgress, Some(computer)) if computer == self.to_move => {
                "AI is thinking...".to_string()
            }
            (Outcome::InProgress, Some(_)) => "Your Turn".to_string(),
        }
    }

    fn apply(&mut self, index: usize) -> Result<Outcome, MoveError> {
        match self.board.get(index) {
            None => {
                return Err(MoveError::OutOfBounds {
                    index,
                    len: self.board.len(),
                });
            }
            Some(Square::Occupied(_)) => return Err(MoveError::Occupied { index }),
            Some(Square::Empty) => {}
        }

        self.board.set(index, Square::Occupied(self.to_move))?;
        self.history.push(index);

        let outcome = self.outcome();
        if outcome.is_over() {
            self.tally.record(outcome);
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(outcome)
    }
}
