//! # Mastermind
//!
//! A Mastermind board engine: a hidden combination of colored pins, a bounded
//! number of guesses, and duplicate-aware scoring of every guess into hits and
//! near misses.
//!
//! The [`repl`] module holds the text command layer used by the binary.

pub mod board;
pub mod color;
pub mod error;
pub mod evaluation;
pub mod random;
pub mod repl;

pub use board::{BoardConfig, GameState, MastermindBoard};
pub use color::PinColor;
pub use error::{CommandError, GameError};
pub use evaluation::Evaluation;
pub use random::IndexSource;

/// Pin count of the original board geometry
pub const DEFAULT_PIN_COUNT: usize = 4;

/// Pin color count of the original board geometry
pub const DEFAULT_PIN_COLOR_COUNT: usize = 6;

/// Guess count of the original board geometry
pub const DEFAULT_GUESS_COUNT: usize = 12;
