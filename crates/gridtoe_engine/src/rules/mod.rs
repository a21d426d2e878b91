//! Game rules for tic-tac-toe on a square grid.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the search can call
//! them on a board it is mutating in place.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, evaluate, winning_line};
