//! Front-end settings loaded from `gridtoe.toml` and command-line flags.

use derive_getters::Getters;
use gridtoe_engine::{ConfigError, Difficulty, GameConfig, GameMode, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File read when no `--config` is given, if present.
pub const DEFAULT_SETTINGS_FILE: &str = "gridtoe.toml";

/// Who plays against whom.
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
pub enum PlayMode {
    /// Human versus human.
    Pvp,
    /// Human versus computer.
    #[default]
    Pvc,
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Rows and columns.
    pub grid_size: Option<usize>,
    /// Marks in a row needed to win.
    pub win_length: Option<usize>,
    /// Computer strength.
    pub difficulty: Option<Difficulty>,
    /// Who plays.
    pub mode: Option<PlayMode>,
    /// Computer mark.
    pub computer: Option<Player>,
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Rows and columns of the grid.
    #[getter(copy)]
    grid_size: usize,

    /// Marks in a row needed to win. Defaults to the grid size.
    #[getter(copy)]
    win_length: Option<usize>,

    /// Computer strength.
    #[getter(copy)]
    difficulty: Difficulty,

    /// Who plays.
    #[getter(copy)]
    mode: PlayMode,

    /// Mark played by the computer in `pvc` mode.
    #[getter(copy)]
    computer: Player,

    /// Pause before each computer move, in milliseconds.
    #[getter(copy)]
    think_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GameConfig::CLASSIC_SIZE,
            win_length: None,
            difficulty: Difficulty::default(),
            mode: PlayMode::default(),
            computer: Player::O,
            think_delay_ms: 0,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(difficulty = %settings.difficulty, mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given, else [`DEFAULT_SETTINGS_FILE`] if it exists,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that is missing or malformed is an error; a
    /// malformed default file is too.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces file values with any flags given on the command line.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(grid_size) = overrides.grid_size {
            self.grid_size = grid_size;
        }
        if overrides.win_length.is_some() {
            self.win_length = overrides.win_length;
        }
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(computer) = overrides.computer {
            self.computer = computer;
        }
        self
    }

    /// Validated engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a grid smaller than 2x2 or a run length
    /// of zero or longer than the grid.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            self.grid_size,
            self.win_length.unwrap_or(self.grid_size),
            self.difficulty,
        )
    }

    /// Session mode built from `mode` and `computer`.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            PlayMode::Pvp => GameMode::HumanVsHuman,
            PlayMode::Pvc => GameMode::HumanVsComputer {
                computer: self.computer,
            },
        }
    }

    /// Pause before each computer move.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}
