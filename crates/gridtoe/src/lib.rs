//! Gridtoe - terminal front end for the gridtoe engine
//!
//! Interactive play, one-shot move suggestions and computer self-play,
//! configured from `gridtoe.toml` and command-line flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod play;
mod selfplay;
mod settings;
mod suggest;

// Crate-level exports - CLI
pub use cli::{Cli, Command, GameArgs};

// Crate-level exports - Settings
pub use settings::{DEFAULT_SETTINGS_FILE, Overrides, PlayMode, Settings};

// Crate-level exports - Front ends
pub use play::{Console, Input};
pub use selfplay::Match;
pub use suggest::{Suggestion, suggest};
