//! Computer-versus-computer games.

use gridtoe_engine::{
    Board, ConfigError, Difficulty, GameConfig, Outcome, Player, Square, Tally,
    select_move_with_rng,
};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Two computer players sharing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    x: GameConfig,
    o: GameConfig,
}

impl Match {
    /// Sets up X and O with their own difficulties on the same grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the grid and run length are invalid.
    #[instrument]
    pub fn new(
        x: Difficulty,
        o: Difficulty,
        grid_size: usize,
        win_length: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let win_length = win_length.unwrap_or(grid_size);
        Ok(Self {
            x: GameConfig::new(grid_size, win_length, x)?,
            o: GameConfig::new(grid_size, win_length, o)?,
        })
    }

    fn config(&self, player: Player) -> &GameConfig {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Plays one game from the empty board, X first.
    pub fn play_game<R: Rng + ?Sized>(&self, rng: &mut R) -> (Outcome, Board) {
        let mut board = self.x.new_board();
        let mut to_move = Player::X;

        loop {
            let outcome = self.x.evaluate(&board);
            if outcome.is_over() {
                return (outcome, board);
            }
            let Some(index) = select_move_with_rng(&mut board, self.config(to_move), to_move, rng)
            else {
                return (outcome, board);
            };
            if board.set(index, Square::Occupied(to_move)).is_err() {
                return (outcome, board);
            }
            to_move = to_move.opponent();
        }
    }

    /// Plays `games` games and tallies the results.
    #[instrument(skip(self, rng), fields(x = %self.x.difficulty(), o = %self.o.difficulty()))]
    pub fn run<R: Rng + ?Sized>(&self, games: u32, rng: &mut R) -> Tally {
        let mut tally = Tally::default();
        for game in 1..=games {
            let (outcome, board) = self.play_game(rng);
            debug!(game, %outcome, board = %board.to_compact(), "Game finished");
            tally.record(outcome);
        }
        info!(%tally, "Self-play finished");
        tally
    }
}
