//! Command-line interface for gridtoe.

use crate::settings::{Overrides, PlayMode};
use clap::{Args, Parser, Subcommand};
use gridtoe_engine::{Difficulty, Player};
use std::path::PathBuf;

/// Gridtoe - tic-tac-toe against a configurable computer opponent
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a settings file (defaults to gridtoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid and difficulty flags
        #[command(flatten)]
        game: GameArgs,

        /// pvp (two humans) or pvc (human vs computer)
        #[arg(long)]
        mode: Option<PlayMode>,

        /// Mark played by the computer (x or o)
        #[arg(long)]
        computer: Option<Player>,
    },

    /// Print the move the computer would play on a given board
    Suggest {
        /// Board such as "XO.|.X.|..." (X/O marks, '.', '-' or '_' for empty)
        #[arg(short, long)]
        board: String,

        /// Side to suggest for (defaults to the side to move)
        #[arg(long)]
        computer: Option<Player>,

        /// Computer strength
        #[arg(short, long, default_value_t = Difficulty::Unbeatable)]
        difficulty: Difficulty,

        /// Marks in a row needed to win (defaults to the grid size)
        #[arg(long)]
        win_length: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play against itself
    Selfplay {
        /// Difficulty playing X
        #[arg(long = "x", default_value_t = Difficulty::Unbeatable)]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(long = "o", default_value_t = Difficulty::Unbeatable)]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Rows and columns
        #[arg(long, default_value = "3")]
        grid_size: usize,

        /// Marks in a row needed to win (defaults to the grid size)
        #[arg(long)]
        win_length: Option<usize>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Flags shared by commands that set up a game.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GameArgs {
    /// Rows and columns
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Marks in a row needed to win (defaults to the grid size)
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Computer strength (easy, medium, hard, unbeatable)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,
}

impl GameArgs {
    /// Settings overrides for these flags plus mode and computer.
    pub fn overrides(self, mode: Option<PlayMode>, computer: Option<Player>) -> Overrides {
        Overrides {
            grid_size: self.grid_size,
            win_length: self.win_length,
            difficulty: self.difficulty,
            mode,
            computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_play_flags() {
        let cli = Cli::try_parse_from([
            "gridtoe",
            "play",
            "--grid-size",
            "4",
            "--difficulty",
            "Hard",
            "--mode",
            "pvp",
            "--computer",
            "x",
        ])
        .unwrap();
        let Command::Play {
            config,
            game,
            mode,
            computer,
        } = cli.command
        else {
            panic!("expected play");
        };
        assert_eq!(config, None);
        assert_eq!(game.grid_size, Some(4));
        assert_eq!(game.difficulty, Some(Difficulty::Hard));
        assert_eq!(mode, Some(PlayMode::Pvp));
        assert_eq!(computer, Some(Player::X));
    }

    #[test]
    fn test_selfplay_defaults() {
        let cli = Cli::try_parse_from(["gridtoe", "selfplay", "--o", "easy"]).unwrap();
        let Command::Selfplay { x, o, games, grid_size, .. } = cli.command else {
            panic!("expected selfplay");
        };
        assert_eq!(x, Difficulty::Unbeatable);
        assert_eq!(o, Difficulty::Easy);
        assert_eq!(games, 10);
        assert_eq!(grid_size, 3);
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["gridtoe", "suggest", "-b", "X........", "-d", "godlike"]).is_err());
    }
}
