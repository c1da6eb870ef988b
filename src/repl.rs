//! Text commands for playing a board from a line-oriented console.

use crate::board::{BoardConfig, GameState, MastermindBoard};
use crate::color::PinColor;
use crate::error::CommandError;
use crate::random::IndexSource;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a combination
    Guess(Vec<PinColor>),
    /// Restart, optionally with a new geometry
    Reset(Option<BoardConfig>),
    /// List the colors in play
    Colors,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The first word selects the command (case-insensitive); unknown words
    /// and blank lines map to [`Command::Help`].
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (keyword, arguments) = match line.split_once(char::is_whitespace) {
            Some((keyword, arguments)) => (keyword, arguments.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "guess" | "g" => parse_combination(arguments).map(Command::Guess),
            "reset" => parse_geometry(arguments).map(Command::Reset),
            "colors" | "colours" => Ok(Command::Colors),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Ok(Command::Help),
        }
    }
}

/// Parse whitespace separated, single character pin symbols.
pub fn parse_combination(arguments: &str) -> Result<Vec<PinColor>, CommandError> {
    arguments
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Ok(PinColor::from_symbol(symbol)?),
                _ => Err(CommandError::InvalidToken(token.to_string())),
            }
        })
        .collect()
}

fn parse_geometry(arguments: &str) -> Result<Option<BoardConfig>, CommandError> {
    let values: Vec<&str> = arguments.split_whitespace().collect();
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() != 3 {
        return Err(CommandError::InvalidGeometry(values.len()));
    }

    let numbers = values
        .iter()
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidNumber(value.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(BoardConfig::new(numbers[0], numbers[1], numbers[2])))
}

/// What a successfully executed command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Guessed(GameState),
    Reset(BoardConfig),
    Colors(Vec<PinColor>),
    Help,
    Quit,
}

/// Apply a command to the board. A failed command leaves the board unchanged.
pub fn execute<R: IndexSource>(
    board: &mut MastermindBoard<R>,
    command: Command,
) -> Result<Outcome, CommandError> {
    match command {
        Command::Guess(candidate) => Ok(Outcome::Guessed(board.guess(candidate)?)),
        Command::Reset(Some(config)) => {
            board.reset(config)?;
            Ok(Outcome::Reset(config))
        }
        Command::Reset(None) => {
            board.restart();
            Ok(Outcome::Reset(board.config()))
        }
        Command::Colors => Ok(Outcome::Colors(board.palette().to_vec())),
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
    }
}

/// Message printed for an outcome, if any.
pub fn describe(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Guessed(GameState::Won) => Some("Congratulations, you cracked the code!".to_string()),
        Outcome::Guessed(GameState::Lost) => Some("No guesses left, the game is lost.".to_string()),
        Outcome::Guessed(GameState::InProgress) => None,
        Outcome::Reset(config) => Some(format!(
            "New game: {} pins, {} colors, {} guesses.",
            config.pin_count, config.pin_color_count, config.guess_count
        )),
        Outcome::Colors(colors) => {
            let entries: Vec<String> = colors
                .iter()
                .map(|c| format!("{}={}", c.symbol(), c.name()))
                .collect();
            Some(format!("Colors in play: {}", entries.join(", ")))
        }
        Outcome::Help | Outcome::Quit => None,
    }
}
