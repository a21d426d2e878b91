//! Gridtoe - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::{Cli, Command, Console, GameArgs, Match, PlayMode, Settings, suggest};
use gridtoe_engine::{Board, Difficulty, GameSession, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,gridtoe=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            game,
            mode,
            computer,
        } => run_play(config, game, mode, computer),
        Command::Suggest {
            board,
            computer,
            difficulty,
            win_length,
            json,
        } => run_suggest(&board, computer, difficulty, win_length, json),
        Command::Selfplay {
            x,
            o,
            games,
            grid_size,
            win_length,
            seed,
        } => run_selfplay(x, o, games, grid_size, win_length, seed),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    game: GameArgs,
    mode: Option<PlayMode>,
    computer: Option<Player>,
) -> Result<()> {
    let settings = Settings::load(config.as_deref())
        .context("failed to load settings")?
        .with_overrides(game.overrides(mode, computer));
    let game_config = settings.game_config().context("invalid game settings")?;

    info!(
        grid_size = game_config.grid_size(),
        win_length = game_config.win_length(),
        difficulty = %game_config.difficulty(),
        mode = %settings.mode(),
        "Starting game"
    );

    let session = GameSession::new(game_config, settings.game_mode());
    let stdin = io::stdin();
    let mut console = Console::new(session, settings.think_delay(), stdin.lock(), io::stdout());
    let tally = console.run()?;
    println!("Final score: {tally}");
    Ok(())
}

/// Print the engine's move for a board
#[instrument]
fn run_suggest(
    board: &str,
    computer: Option<Player>,
    difficulty: Difficulty,
    win_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut board: Board = board.parse().context("invalid board")?;
    let suggestion =
        suggest(&mut board, computer, difficulty, win_length).context("invalid game settings")?;

    if json {
        println!("{}", serde_json::to_string(&suggestion)?);
    } else {
        println!("{board}\n{suggestion}");
    }
    Ok(())
}

/// Play computer against computer and print the tally
#[instrument]
fn run_selfplay(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    grid_size: usize,
    win_length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let game = Match::new(x, o, grid_size, win_length).context("invalid game settings")?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let tally = game.run(games, &mut rng);
    println!("X ({x}) vs O ({o}), {games} games");
    println!("{tally}");
    Ok(())
}
