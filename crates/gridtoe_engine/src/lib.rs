//! Gridtoe engine - tic-tac-toe rules and computer opponents
//!
//! Pure game logic with no I/O: board representation, win and draw
//! detection on an `N x N` grid with a configurable run length, and four
//! computer strategies of increasing strength.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Outcome`]
//! - **Rules**: line detection over raw cell slices ([`rules`])
//! - **Config**: validated [`GameConfig`] and [`Difficulty`]
//! - **Strategy**: random, win-or-block and alpha-beta minimax ([`strategy`])
//! - **Session**: turn order, history and tally for a front end ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use gridtoe_engine::{Difficulty, GameConfig, Outcome, Player, select_move};
//!
//! let config = GameConfig::classic(Difficulty::Unbeatable);
//! let mut board = "OO.|XX.|...".parse()?;
//! assert_eq!(select_move(&mut board, &config, Player::O), Some(2));
//! assert_eq!(config.evaluate(&board), Outcome::InProgress);
//! # Ok::<(), gridtoe_engine::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod session;
mod types;

pub mod rules;
pub mod strategy;

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, MoveError};

// Crate-level exports - Core types
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - Configuration
pub use config::{Difficulty, GameConfig};

// Crate-level exports - Move selection
pub use strategy::{Strategy, select_move, select_move_with_rng};

// Crate-level exports - Session
pub use session::{GameMode, GameSession, Tally};
