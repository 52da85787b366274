//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a selector table to choose between a
//! Global predictor (indexed by global history alone) and a Local predictor
//! (per-branch history indexing a shared counter table). This allows the
//! predictor to adapt to different types of branch behaviors.
//!
//! The selector is a table of the same 2-bit counters: a high bit of 1 picks
//! the local prediction, 0 picks the global one. It only moves when exactly
//! one of the two components was right.

use super::BranchPredictor;
use super::counter::{CounterState, counter_table, history_table};
use crate::common::bits::{index_from_ghr_only, index_from_pc_only, mask_of, pow2, shift_history};
use crate::common::{ConfigError, Outcome};
use crate::config::PredictorConfig;

/// Component the selector favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Use the global-history prediction.
    Global,
    /// Use the per-branch local-history prediction.
    Local,
}

impl Choice {
    /// Decodes a selector counter: high bit set means local.
    pub const fn from_selector(state: CounterState) -> Self {
        match state.prediction() {
            Outcome::Taken => Self::Local,
            Outcome::NotTaken => Self::Global,
        }
    }

    /// Counter step that moves a selector toward this choice.
    const fn training_outcome(self) -> Outcome {
        match self {
            Self::Local => Outcome::Taken,
            Self::Global => Outcome::NotTaken,
        }
    }
}

/// Tournament Predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Global History Register.
    ghr: u32,
    /// Mask for the GHR and for indexing the global and selector tables.
    ghr_mask: u32,
    /// Global Pattern History Table (2-bit counters).
    global_table: Vec<CounterState>,
    /// Selector table (2-bit counters), indexed like the global table.
    selector: Vec<CounterState>,

    /// Local history registers, one per PC index.
    pattern_history: Vec<u32>,
    /// Mask selecting the PC bits that index `pattern_history`.
    pc_index_mask: u32,
    /// Mask truncating a local history register to `L` bits.
    local_mask: u32,
    /// Local prediction table indexed by a local history pattern.
    local_table: Vec<CounterState>,
}

impl TournamentPredictor {
    /// Creates a Tournament predictor.
    ///
    /// # Arguments
    ///
    /// * `ghistory_bits` - Global history width; sizes the global and selector tables.
    /// * `lhistory_bits` - Local history width; sizes the local prediction table.
    /// * `pc_index_bits` - PC bits used to select a local history register.
    /// * `init` - Start state for all three counter tables.
    pub fn new(
        ghistory_bits: i32,
        lhistory_bits: i32,
        pc_index_bits: i32,
        init: CounterState,
    ) -> Result<Self, ConfigError> {
        PredictorConfig::tournament(ghistory_bits, lhistory_bits, pc_index_bits).validate()?;

        let global_size = pow2(ghistory_bits) as usize;
        Ok(Self {
            ghr: 0,
            ghr_mask: mask_of(ghistory_bits),
            global_table: counter_table(global_size, init),
            selector: counter_table(global_size, init),

            pattern_history: history_table(pow2(pc_index_bits) as usize),
            pc_index_mask: mask_of(pc_index_bits),
            local_mask: mask_of(lhistory_bits),
            local_table: counter_table(pow2(lhistory_bits) as usize, init),
        })
    }

    /// Current value of the global history register.
    pub const fn ghr(&self) -> u32 {
        self.ghr
    }

    /// Global counter table, indexed by the GHR.
    pub fn global_table(&self) -> &[CounterState] {
        &self.global_table
    }

    /// Selector counter table, indexed by the GHR.
    pub fn selector(&self) -> &[CounterState] {
        &self.selector
    }

    /// Local history registers, indexed by the low PC bits.
    pub fn pattern_history(&self) -> &[u32] {
        &self.pattern_history
    }

    /// Local counter table, indexed by a local history pattern.
    pub fn local_table(&self) -> &[CounterState] {
        &self.local_table
    }

    /// Component the selector currently favors for the present global history.
    pub fn choice(&self) -> Choice {
        Choice::from_selector(self.selector[self.global_index()])
    }

    #[inline(always)]
    const fn global_index(&self) -> usize {
        index_from_ghr_only(self.ghr, self.ghr_mask) as usize
    }

    #[inline(always)]
    const fn local_history_index(&self, pc: u32) -> usize {
        index_from_pc_only(pc, self.pc_index_mask) as usize
    }

    #[inline(always)]
    fn local_pattern(&self, lh_idx: usize) -> u32 {
        self.pattern_history[lh_idx] & self.local_mask
    }
}

impl BranchPredictor for TournamentPredictor {
    /// Reads the selector at the global index and returns the favored component's prediction.
    fn predict(&self, pc: u32) -> Outcome {
        let g_idx = self.global_index();
        match Choice::from_selector(self.selector[g_idx]) {
            Choice::Local => {
                let pattern = self.local_pattern(self.local_history_index(pc));
                self.local_table[pattern as usize].prediction()
            }
            Choice::Global => self.global_table[g_idx].prediction(),
        }
    }

    /// Trains both components, shifts the GHR, then moves the selector toward
    /// whichever component was right, judged by the counters as they were
    /// before this update.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let lh_idx = self.local_history_index(pc);
        let pattern = self.local_pattern(lh_idx);
        let local_before = self.local_table[pattern as usize];
        self.local_table[pattern as usize] = local_before.next(outcome);
        self.pattern_history[lh_idx] = shift_history(pattern, outcome.bit(), self.local_mask);

        let g_idx = self.global_index();
        let global_before = self.global_table[g_idx];
        self.global_table[g_idx] = global_before.next(outcome);

        self.ghr = shift_history(self.ghr, outcome.bit(), self.ghr_mask);

        let local_miss = local_before.prediction().bit() ^ outcome.bit();
        let global_miss = global_before.prediction().bit() ^ outcome.bit();
        let favored = match global_miss.cmp(&local_miss) {
            std::cmp::Ordering::Less => Some(Choice::Global),
            std::cmp::Ordering::Greater => Some(Choice::Local),
            std::cmp::Ordering::Equal => None,
        };
        if let Some(choice) = favored {
            self.selector[g_idx] = self.selector[g_idx].next(choice.training_outcome());
        }
    }
}
