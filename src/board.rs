//! The Mastermind board: geometry, secret, guess history and game state.

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::color::{to_symbol_string, PinColor};
use crate::error::GameError;
use crate::evaluation::Evaluation;
use crate::random::{secure_source, IndexSource};
use crate::{DEFAULT_GUESS_COUNT, DEFAULT_PIN_COLOR_COUNT, DEFAULT_PIN_COUNT};

/// Board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    /// Length of the secret and of every guess
    pub pin_count: usize,
    /// Number of colors in play, taken from the front of [`PinColor::ALL`]
    pub pin_color_count: usize,
    /// Maximum number of guesses
    pub guess_count: usize,
}

impl BoardConfig {
    pub fn new(pin_count: usize, pin_color_count: usize, guess_count: usize) -> Self {
        Self {
            pin_count,
            pin_color_count,
            guess_count,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.pin_count == 0
            || self.pin_color_count == 0
            || self.pin_color_count > PinColor::COUNT
            || self.guess_count == 0
        {
            return Err(GameError::InvalidConfiguration {
                pin_count: self.pin_count,
                pin_color_count: self.pin_color_count,
                guess_count: self.guess_count,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PIN_COUNT, DEFAULT_PIN_COLOR_COUNT, DEFAULT_GUESS_COUNT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameState::InProgress => "in progress",
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// A Mastermind game in progress.
///
/// Only [`reset`](Self::reset) changes the geometry and the secret, and only
/// [`guess`](Self::guess) appends to the history. Both validate before
/// mutating, so a failed call leaves the board as it was.
#[derive(Debug, Clone)]
pub struct MastermindBoard<R: IndexSource = StdRng> {
    config: BoardConfig,
    secret: Vec<PinColor>,
    guesses: Vec<Vec<PinColor>>,
    source: R,
}

impl MastermindBoard<StdRng> {
    /// Create a board with the original 4/6/12 geometry and a secure random source.
    pub fn new() -> Self {
        let mut board = Self {
            config: BoardConfig::default(),
            secret: Vec::new(),
            guesses: Vec::new(),
            source: secure_source(),
        };
        board.roll_secret();
        board
    }
}

impl Default for MastermindBoard<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: IndexSource> MastermindBoard<R> {
    pub fn with_source(source: R, config: BoardConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut board = Self {
            config,
            secret: Vec::with_capacity(config.pin_count),
            guesses: Vec::new(),
            source,
        };
        board.roll_secret();
        Ok(board)
    }

    /// Apply a new geometry, draw a new secret and clear the history.
    pub fn reset(&mut self, config: BoardConfig) -> Result<(), GameError> {
        config.validate()?;
        self.config = config;
        self.roll_secret();
        Ok(())
    }

    /// Start over with the current geometry.
    pub fn restart(&mut self) {
        self.roll_secret();
    }

    fn roll_secret(&mut self) {
        let BoardConfig {
            pin_count,
            pin_color_count,
            ..
        } = self.config;

        self.guesses.clear();
        self.secret.clear();
        for _ in 0..pin_count {
            let ordinal = self.source.next_index(pin_color_count);
            debug_assert!(ordinal < pin_color_count);
            self.secret.push(PinColor::ALL[ordinal % pin_color_count]);
        }

        debug!(
            pin_count,
            pin_color_count,
            guess_count = self.config.guess_count,
            "board reset"
        );
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn pin_count(&self) -> usize {
        self.config.pin_count
    }

    pub fn pin_color_count(&self) -> usize {
        self.config.pin_color_count
    }

    pub fn guess_count(&self) -> usize {
        self.config.guess_count
    }

    /// The colors a secret on this board may contain
    pub fn palette(&self) -> &'static [PinColor] {
        PinColor::palette(self.config.pin_color_count)
    }

    pub fn secret(&self) -> &[PinColor] {
        &self.secret
    }

    /// All submitted guesses, oldest first
    pub fn guesses(&self) -> &[Vec<PinColor>] {
        &self.guesses
    }

    pub fn remaining_guesses(&self) -> usize {
        self.config.guess_count.saturating_sub(self.guesses.len())
    }

    pub fn is_won(&self) -> bool {
        match self.guesses.last() {
            Some(last) => self.guesses.len() <= self.config.guess_count && *last == self.secret,
            None => false,
        }
    }

    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.guesses.len() >= self.config.guess_count
    }

    pub fn is_over(&self) -> bool {
        self.state() != GameState::InProgress
    }

    pub fn state(&self) -> GameState {
        if self.is_won() {
            GameState::Won
        } else if self.is_lost() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    fn check_length(&self, candidate: &[PinColor]) -> Result<(), GameError> {
        if candidate.len() != self.secret.len() {
            return Err(GameError::LengthMismatch {
                expected: self.secret.len(),
                actual: candidate.len(),
            });
        }
        Ok(())
    }

    /// Submit a guess and return the resulting game state.
    pub fn guess(&mut self, candidate: Vec<PinColor>) -> Result<GameState, GameError> {
        self.check_length(&candidate)?;

        let state = self.state();
        if state != GameState::InProgress {
            warn!(%state, "guess rejected, game is over");
            return Err(GameError::GameOver(state));
        }

        debug!(
            guess = %to_symbol_string(&candidate),
            number = self.guesses.len() + 1,
            "guess submitted"
        );
        self.guesses.push(candidate);

        let state = self.state();
        match state {
            GameState::Won => info!(guesses = self.guesses.len(), "game won"),
            GameState::Lost => info!(guesses = self.guesses.len(), "game lost"),
            GameState::InProgress => {}
        }
        Ok(state)
    }

    /// Score any combination of the right length against the secret.
    pub fn evaluate(&self, candidate: &[PinColor]) -> Result<Evaluation, GameError> {
        self.check_length(candidate)?;
        Ok(Evaluation::calculate(candidate, &self.secret))
    }

    /// Render the board: the secret (masked while the game is running), a
    /// separator, then one line per guess with its evaluation.
    pub fn to_display_string(&self) -> String {
        let reveal = self.is_over();
        let width = (2 * self.secret.len()).saturating_sub(1);

        let secret_row: Vec<String> = self
            .secret
            .iter()
            .map(|color| (if reveal { color.symbol() } else { '*' }).to_string())
            .collect();

        let mut lines = vec![secret_row.join(" "), "=".repeat(width)];
        for guess in &self.guesses {
            let evaluation = Evaluation::calculate(guess, &self.secret);
            lines.push(format!("{}\t{}", to_symbol_string(guess), evaluation));
        }
        lines.join("\n")
    }
}

impl<R: IndexSource> std::fmt::Display for MastermindBoard<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
