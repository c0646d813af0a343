//! Line-oriented front end: prompts on one stream, board and messages on
//! another. Invalid input is answered with a warning and asked again.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::controller::{GameController, GameMode, Phase};
use crate::error::{InputError, MoveError};
use crate::game::{GameOutcome, Player, COLS};

pub const MODE_PROMPT: &str = "Please type 1 for one player mode, or 2 for two player mode: ";
pub const RANGE_WARNING: &str = "Warning! - Input must be a number 1-7";
pub const FULL_WARNING: &str = "Selected column is full! Please choose another";

/// Parse a 1-based column typed by a player into a zero-based index.
pub fn parse_column(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NonNumericInput(trimmed.to_string()))?;
    if value < 1 || value > COLS as i64 {
        return Err(InputError::InvalidColumnRange(value));
    }
    Ok(value as usize - 1)
}

/// Parse the start-up mode choice (1 or 2).
pub fn parse_mode(input: &str) -> Result<u8, InputError> {
    match input.trim() {
        "1" => Ok(1),
        "2" => Ok(2),
        other => Err(InputError::InvalidMode(other.to_string())),
    }
}

/// Single line announcing the end of the game.
pub fn outcome_message(outcome: GameOutcome, mode: GameMode) -> String {
    match (outcome, mode) {
        (GameOutcome::Draw, _) => "It's a draw!".to_string(),
        (GameOutcome::Win(winner), GameMode::VersusAi { ai_player }) if winner == ai_player => {
            "You lose".to_string()
        }
        (GameOutcome::Win(_), GameMode::VersusAi { .. }) => "You win!".to_string(),
        (GameOutcome::Win(winner), GameMode::TwoPlayer) => format!("{winner} has won!"),
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Consume the console and hand back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for the game mode until a valid choice is typed.
    pub fn prompt_mode(&mut self) -> io::Result<Option<u8>> {
        loop {
            write!(self.output, "{MODE_PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_mode(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => debug!(%err, "rejected mode choice"),
            }
        }
    }

    /// Ask `player` for a column until a number in 1..=7 is typed. Returns
    /// the zero-based column.
    pub fn prompt_column(&mut self, player: Player, mode: GameMode) -> io::Result<Option<usize>> {
        loop {
            match mode {
                GameMode::TwoPlayer => write!(
                    self.output,
                    "{player}, choose which column to put your piece into (1-7): "
                )?,
                GameMode::VersusAi { .. } => write!(
                    self.output,
                    "Choose which column to put your piece into (1-7): "
                )?,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_column(&line) {
                Ok(col) => return Ok(Some(col)),
                Err(err) => {
                    debug!(%err, "rejected column input");
                    writeln!(self.output, "{RANGE_WARNING}")?;
                }
            }
        }
    }

    /// Play one session to the end. Returns the outcome, or `None` if the
    /// input ran out first.
    pub fn run(&mut self, controller: &mut GameController) -> io::Result<Option<GameOutcome>> {
        write!(self.output, "{}", controller.state().board())?;

        loop {
            let player = match controller.phase() {
                Phase::GameOver(outcome) => {
                    writeln!(self.output, "{}", outcome_message(outcome, controller.mode()))?;
                    return Ok(Some(outcome));
                }
                Phase::AwaitingMove(player) => player,
            };

            if controller.is_ai_turn() {
                writeln!(self.output, "Opponent's turn")?;
                controller.play_ai_turn().map_err(io::Error::other)?;
            } else {
                loop {
                    let Some(col) = self.prompt_column(player, controller.mode())? else {
                        warn!("input closed before the game finished");
                        return Ok(None);
                    };
                    match controller.play(col) {
                        Ok(_) => break,
                        Err(MoveError::ColumnFull(_)) => writeln!(self.output, "{FULL_WARNING}")?,
                        Err(err) => writeln!(self.output, "{err}")?,
                    }
                }
            }

            write!(self.output, "{}", controller.state().board())?;
        }
    }
}
