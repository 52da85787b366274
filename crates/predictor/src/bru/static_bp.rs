//! Static Branch Predictor.
//!
//! Implements an "Always Taken" policy for conditional branches. It holds no
//! tables and ignores training.

use super::BranchPredictor;
use crate::common::Outcome;

/// Static Branch Predictor structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    /// Always predicts taken.
    fn predict(&self, _pc: u32) -> Outcome {
        Outcome::Taken
    }

    /// No direction history is kept.
    fn train(&mut self, _pc: u32, _outcome: Outcome) {}
}
