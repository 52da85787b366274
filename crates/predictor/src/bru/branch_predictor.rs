//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every direction
//! predictor implements. A predictor is queried with `predict` before the
//! branch resolves and trained with `train` once the real outcome is known.

use crate::common::Outcome;

/// Trait for branch direction prediction algorithms.
///
/// Callers must alternate strictly: `predict(pc)` for a branch, then
/// `train(pc, outcome)` for the same branch, before moving to the next one.
pub trait BranchPredictor {
    /// Predicts the direction of the conditional branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction. Any value is
    ///   accepted; bits beyond the table width are masked off.
    fn predict(&self, pc: u32) -> Outcome;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `outcome` - Whether the branch was actually taken
    fn train(&mut self, pc: u32, outcome: Outcome);
}
