//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `train()`: O(1)
//! - **Space Complexity:** O(2^G) 2-bit counters, where G is the history width
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length too short/long for pattern

use super::BranchPredictor;
use super::counter::{CounterState, counter_table};
use crate::common::bits::{index_from, mask_of, pow2, shift_history};
use crate::common::{ConfigError, Outcome};
use crate::config::PredictorConfig;

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: u32,
    /// Mask of `G` low bits, applied to the GHR and to table indices.
    ghr_mask: u32,
    /// Pattern History Table containing 2-bit saturating counters.
    table: Vec<CounterState>,
}

impl GSharePredictor {
    /// Creates a GShare predictor with `ghistory_bits` of history and `2^ghistory_bits`
    /// counters, each starting in `init`.
    pub fn new(ghistory_bits: i32, init: CounterState) -> Result<Self, ConfigError> {
        PredictorConfig::gshare(ghistory_bits).validate()?;
        Ok(Self {
            ghr: 0,
            ghr_mask: mask_of(ghistory_bits),
            table: counter_table(pow2(ghistory_bits) as usize, init),
        })
    }

    /// Current value of the global history register.
    pub const fn ghr(&self) -> u32 {
        self.ghr
    }

    /// The counter table, indexed by `(pc ^ ghr) & mask`.
    pub fn table(&self) -> &[CounterState] {
        &self.table
    }

    /// Index into the counter table for `pc` under the current history.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> usize {
        index_from(pc, self.ghr, self.ghr_mask) as usize
    }
}

impl BranchPredictor for GSharePredictor {
    /// Predicts taken if the counter at the hashed index is 2 or 3.
    fn predict(&self, pc: u32) -> Outcome {
        self.table[self.index(pc)].prediction()
    }

    /// Steps the counter at the hashed index, then shifts the outcome into the GHR.
    ///
    /// The index is computed from the history as it was before this branch.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        self.table[idx] = self.table[idx].next(outcome);
        self.ghr = shift_history(self.ghr, outcome.bit(), self.ghr_mask);
    }
}
