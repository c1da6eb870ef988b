use crate::board::GameState;

/// Errors raised by the board and by symbol lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(
        "invalid board geometry: {pin_count} pins, {pin_color_count} colors, {guess_count} guesses \
         (pins and guesses must be positive, colors must be within 1..=12)"
    )]
    InvalidConfiguration {
        pin_count: usize,
        pin_color_count: usize,
        guess_count: usize,
    },

    #[error("must specify {expected} pin symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("game is already {0}!")]
    GameOver(GameState),

    #[error("unknown pin symbol '{0}'")]
    UnknownSymbol(char),
}

/// Errors raised while parsing or executing a REPL command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("pin symbols must be single characters, got \"{0}\"")]
    InvalidToken(String),

    #[error("reset expects <pin-count> <pin-color-count> <guess-count>, got {0} values")]
    InvalidGeometry(usize),

    #[error("not a non-negative number: \"{0}\"")]
    InvalidNumber(String),

    #[error(transparent)]
    Game(#[from] GameError),
}
