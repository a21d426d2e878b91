//! Interactive game loop over any line-based reader and writer.

use anyhow::{Context, Result};
use gridtoe_engine::{GameSession, MoveError, Strategy, Tally};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave the game.
    Quit,
    /// Clear the board and start again.
    Restart,
    /// Play the given 1-based cell.
    Cell(usize),
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "q" | "quit" => Ok(Input::Quit),
            "r" | "restart" => Ok(Input::Restart),
            other => match other.parse::<usize>() {
                Ok(cell) if cell > 0 => Ok(Input::Cell(cell)),
                _ => Err(format!("'{s}' is not a cell number, 'r' or 'q'")),
            },
        }
    }
}

/// Message shown for a rejected move, with cells numbered from 1.
fn describe(err: MoveError) -> String {
    match err {
        MoveError::OutOfBounds { len, .. } => format!("Pick a cell from 1 to {len}"),
        MoveError::Occupied { index } => format!("Cell {} is already taken", index + 1),
        other => other.to_string(),
    }
}

/// Terminal front end for a [`GameSession`].
pub struct Console<R, W> {
    session: GameSession,
    think_delay: Duration,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a session with the given input and output.
    pub fn new(session: GameSession, think_delay: Duration, input: R, output: W) -> Self {
        Self {
            session,
            think_delay,
            input,
            output,
        }
    }

    /// The wrapped session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs games until the player quits, declines a rematch or input ends.
    ///
    /// Returns the final tally.
    #[instrument(skip(self), fields(mode = ?self.session.mode()))]
    pub fn run(&mut self) -> Result<Tally> {
        let config = *self.session.config();
        if Strategy::is_downgraded(&config) {
            writeln!(
                self.output,
                "Note: {} play needs a 3x3 grid; the computer plays randomly on {}x{}.",
                config.difficulty().label(),
                config.grid_size(),
                config.grid_size()
            )?;
        }

        loop {
            if !self.play_one()? {
                break;
            }
            writeln!(self.output, "{}", self.session.tally())?;
            write!(self.output, "Play again? [y/N] ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    self.session.restart();
                }
                _ => break,
            }
        }

        info!(tally = %self.session.tally(), "Leaving game");
        Ok(self.session.tally())
    }

    /// Plays until the game ends. Returns `false` if the player quit.
    fn play_one(&mut self) -> Result<bool> {
        while self.session.is_active() {
            writeln!(self.output, "\n{}\n{}", self.session.board(), self.session.status_line())?;

            if self.session.is_computer_turn() {
                if !self.think_delay.is_zero() {
                    std::thread::sleep(self.think_delay);
                }
                let (index, _) = self
                    .session
                    .computer_move()
                    .context("computer failed to move")?;
                writeln!(self.output, "Computer plays {}", index + 1)?;
                continue;
            }

            write!(
                self.output,
                "{} to move (1-{}, r restart, q quit): ",
                self.session.to_move(),
                self.session.board().len()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Ok(false);
            };
            match line.parse::<Input>() {
                Ok(Input::Quit) => return Ok(false),
                Ok(Input::Restart) => {
                    self.session.restart();
                    writeln!(self.output, "Board cleared.")?;
                }
                Ok(Input::Cell(cell)) => {
                    if let Err(err) = self.session.play(cell - 1) {
                        warn!(cell, %err, "Move rejected");
                        writeln!(self.output, "{}", describe(err))?;
                    }
                }
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }

        writeln!(self.output, "\n{}\n{}", self.session.board(), self.session.status_line())?;
        Ok(true)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
