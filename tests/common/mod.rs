#![allow(dead_code)]

use mastermind::{BoardConfig, IndexSource, MastermindBoard, PinColor};

/// Hands out a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    indices: Vec<usize>,
    position: usize,
}

impl ScriptedIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, position: 0 }
    }

    /// Script that reproduces the given secret.
    pub fn for_secret(secret: &[PinColor]) -> Self {
        Self::new(secret.iter().map(|c| c.index()).collect())
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index % bound
    }
}

pub fn board_with_secret(secret: &[PinColor], guess_count: usize) -> MastermindBoard<ScriptedIndices> {
    let colors = secret.iter().map(|c| c.index() + 1).max().unwrap_or(0).max(6);
    let config = BoardConfig::new(secret.len(), colors, guess_count);
    MastermindBoard::with_source(ScriptedIndices::for_secret(secret), config).unwrap()
}

pub fn parse(symbols: &str) -> Vec<PinColor> {
    symbols
        .chars()
        .map(|c| PinColor::from_symbol(c).unwrap())
        .collect()
}
