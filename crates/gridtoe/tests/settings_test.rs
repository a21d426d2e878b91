//! Tests for loading settings files.

use gridtoe::{Overrides, PlayMode, Settings};
use gridtoe_engine::{Difficulty, GameMode, Player};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_loads_full_settings_file() {
    let file = settings_file(
        r#"
grid_size = 3
win_length = 3
difficulty = "hard"
mode = "pvc"
computer = "x"
think_delay_ms = 250
"#,
    );

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.difficulty(), Difficulty::Hard);
    assert_eq!(settings.mode(), PlayMode::Pvc);
    assert_eq!(settings.think_delay(), Duration::from_millis(250));
    assert_eq!(
        settings.game_mode(),
        GameMode::HumanVsComputer {
            computer: Player::X
        }
    );
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = Settings::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_reported() {
    let file = settings_file("difficulty = \"impossible\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_flags_override_file_then_validate() {
    let file = settings_file("grid_size = 4\nwin_length = 4\n");
    let settings = Settings::from_file(file.path())
        .unwrap()
        .with_overrides(Overrides {
            grid_size: Some(3),
            ..Overrides::default()
        });
    // File run length 4 no longer fits the 3x3 grid from the flags.
    assert!(settings.game_config().is_err());

    let settings = settings.with_overrides(Overrides {
        win_length: Some(3),
        mode: Some(PlayMode::Pvp),
        ..Overrides::default()
    });
    let config = settings.game_config().unwrap();
    assert!(config.is_classic());
    assert_eq!(settings.game_mode(), GameMode::HumanVsHuman);
}
