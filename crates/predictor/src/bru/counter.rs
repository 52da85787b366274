//! 2-bit saturating counter.
//!
//! The counter is the storage cell of every table-based predictor: the gshare
//! table, the tournament global and local tables, and the tournament selector.
//! It moves one step toward `StrongTaken` on a taken outcome and one step toward
//! `StrongNotTaken` on a not-taken outcome, clamping at both ends.

use serde::Deserialize;

use crate::common::Outcome;

/// State of a 2-bit saturating counter.
///
/// The discriminants are the hardware encoding; the high bit is the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[repr(u8)]
pub enum CounterState {
    /// Predict not taken, strongly (`0b00`).
    #[serde(alias = "SN")]
    StrongNotTaken = 0,
    /// Predict not taken, weakly (`0b01`).
    #[default]
    #[serde(alias = "WN")]
    WeakNotTaken = 1,
    /// Predict taken, weakly (`0b10`).
    #[serde(alias = "WT")]
    WeakTaken = 2,
    /// Predict taken, strongly (`0b11`).
    #[serde(alias = "ST")]
    StrongTaken = 3,
}

impl CounterState {
    /// Decodes the low two bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::StrongNotTaken,
            1 => Self::WeakNotTaken,
            2 => Self::WeakTaken,
            _ => Self::StrongTaken,
        }
    }

    /// Hardware encoding in `0..=3`.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Direction encoded by the high bit.
    #[inline(always)]
    pub const fn prediction(self) -> Outcome {
        Outcome::from_bit((self as u32) >> 1)
    }

    /// Next state after observing `outcome`, clamped at the extremes.
    #[inline]
    pub const fn next(self, outcome: Outcome) -> Self {
        match (self, outcome) {
            (Self::StrongTaken, Outcome::Taken) => Self::StrongTaken,
            (Self::StrongNotTaken, Outcome::NotTaken) => Self::StrongNotTaken,
            (state, Outcome::Taken) => Self::from_bits(state.bits() + 1),
            (state, Outcome::NotTaken) => Self::from_bits(state.bits() - 1),
        }
    }
}

/// Returns the direction a counter predicts (`Taken` for states 2 and 3).
#[inline(always)]
pub const fn extract_prediction(state: CounterState) -> Outcome {
    state.prediction()
}

/// Returns the state reached from `state` after observing `outcome`.
#[inline(always)]
pub const fn next_state(state: CounterState, outcome: Outcome) -> CounterState {
    state.next(outcome)
}

/// Allocates a counter table of `size` entries, all in state `init`.
pub fn counter_table(size: usize, init: CounterState) -> Vec<CounterState> {
    vec![init; size]
}

/// Allocates a history table of `size` registers, all cleared.
pub fn history_table(size: usize) -> Vec<u32> {
    vec![0; size]
}
