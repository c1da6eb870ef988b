//! Scoring of a guess against the secret.
//!
//! Every guess pin lands in exactly one bucket:
//! - hit: same color as the secret at that position
//! - near miss: color occurs elsewhere in the secret and is not yet used up
//! - complete miss: everything else

use crate::color::PinColor;

/// Outcome of comparing one guess with the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Evaluation {
    pub hits: usize,
    pub near_misses: usize,
    pub complete_misses: usize,
}

impl Evaluation {
    /// Score `guess` against `secret`.
    ///
    /// Hits are counted per color. A misplaced guess pin only counts as a near
    /// miss while the secret still has unmatched pins of that color, so each
    /// secret pin contributes to at most one hit or near miss.
    ///
    /// Both slices must have the same length; the board checks this before
    /// calling.
    pub fn calculate(guess: &[PinColor], secret: &[PinColor]) -> Self {
        debug_assert_eq!(guess.len(), secret.len());

        let mut secret_counts = [0usize; PinColor::COUNT];
        let mut hit_counts = [0usize; PinColor::COUNT];
        let mut miss_counts = [0usize; PinColor::COUNT];

        for &color in secret {
            secret_counts[color.index()] += 1;
        }

        for (&guessed, &hidden) in guess.iter().zip(secret) {
            if guessed == hidden {
                hit_counts[guessed.index()] += 1;
            } else {
                miss_counts[guessed.index()] += 1;
            }
        }

        let mut hits = 0;
        let mut near_misses = 0;
        for color in 0..PinColor::COUNT {
            if secret_counts[color] == 0 {
                continue;
            }
            hits += hit_counts[color];
            near_misses += (secret_counts[color] - hit_counts[color]).min(miss_counts[color]);
        }

        Self {
            hits,
            near_misses,
            complete_misses: secret.len() - hits - near_misses,
        }
    }

    /// Total number of scored pins
    pub fn pin_count(self) -> usize {
        self.hits + self.near_misses + self.complete_misses
    }

    /// Check if every pin was a hit
    pub fn is_win(self) -> bool {
        self.near_misses == 0 && self.complete_misses == 0
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} hits, {} near misses, {} complete misses)",
            self.hits, self.near_misses, self.complete_misses
        )
    }
}
