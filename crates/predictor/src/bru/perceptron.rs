//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction, after Jiménez
//! and Lin, "Dynamic Branch Prediction with Perceptrons". Instead of saturating
//! counters it keeps a table of weight vectors, selected by `(pc ^ ghr)`. The
//! prediction is the sign of the bias plus the dot product of the weights with
//! the bipolar (+1/-1) history vector.
//!
//! This variant uses global history only, and its history width doubles as the
//! table index width. Weights are `i64` accumulators that are never clamped to
//! a narrow width; arithmetic saturates at the `i64` limits instead of wrapping.

use super::BranchPredictor;
use crate::common::bits::{index_from, mask_of, pow2, shift_history};
use crate::common::{ConfigError, Outcome};
use crate::config::PredictorConfig;

/// History input `i` (1-based) as +1 if bit `i - 1` of `ghr` is set, else -1.
///
/// Inputs past the register width read as -1.
#[inline(always)]
pub const fn signed_bit(ghr: u32, i: usize) -> i32 {
    match ghr.checked_shr(i.saturating_sub(1) as u32) {
        Some(v) if v & 1 == 1 => 1,
        _ => -1,
    }
}

/// Perceptron output: `w0 + sum(w[i] * signed_bit(ghr, i))` for `i` in `1..weights.len()`.
///
/// Saturates at `i64::MIN` / `i64::MAX`.
pub fn weighted_sum(weights: &[i64], ghr: u32) -> i64 {
    let Some((&bias, history_weights)) = weights.split_first() else {
        return 0;
    };
    history_weights.iter().enumerate().fold(bias, |y, (i, &w)| {
        y.saturating_add(w.saturating_mul(i64::from(signed_bit(ghr, i + 1))))
    })
}

/// Perceptron Predictor structure.
#[derive(Debug, Clone)]
pub struct PerceptronPredictor {
    /// Global History Register.
    ghr: u32,
    /// Mask for the GHR and for indexing the table.
    ghr_mask: u32,
    /// Table of weights (flattened, `row_size` per entry).
    table: Vec<i64>,
    /// Size of a single row in the table (history length + bias).
    row_size: usize,
    /// Training threshold (theta).
    threshold: i32,
}

impl PerceptronPredictor {
    /// Creates a Perceptron predictor with `ghistory_bits` of history,
    /// `2^ghistory_bits` zeroed weight rows, and training margin `theta`.
    pub fn new(ghistory_bits: i32, theta: i32) -> Result<Self, ConfigError> {
        PredictorConfig::custom(ghistory_bits, theta).validate()?;

        let row_size = ghistory_bits as usize + 1;
        Ok(Self {
            ghr: 0,
            ghr_mask: mask_of(ghistory_bits),
            table: vec![0; pow2(ghistory_bits) as usize * row_size],
            row_size,
            threshold: theta,
        })
    }

    /// Current value of the global history register.
    pub const fn ghr(&self) -> u32 {
        self.ghr
    }

    /// Training threshold.
    pub const fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Number of weight rows.
    pub const fn rows(&self) -> usize {
        self.table.len() / self.row_size
    }

    /// Weight row `idx`: the bias followed by one weight per history bit.
    ///
    /// Returns `None` if `idx` is out of range.
    pub fn weights(&self, idx: usize) -> Option<&[i64]> {
        let base = idx.checked_mul(self.row_size)?;
        self.table.get(base..base.checked_add(self.row_size)?)
    }

    /// Mutable weight row `idx`, for seeding a table before a run.
    pub fn weights_mut(&mut self, idx: usize) -> Option<&mut [i64]> {
        let base = idx.checked_mul(self.row_size)?;
        let end = base.checked_add(self.row_size)?;
        self.table.get_mut(base..end)
    }

    /// Row selected for `pc` under the current history.
    #[inline(always)]
    pub const fn index(&self, pc: u32) -> usize {
        index_from(pc, self.ghr, self.ghr_mask) as usize
    }

    fn row(&self, idx: usize) -> &[i64] {
        let base = idx * self.row_size;
        &self.table[base..base + self.row_size]
    }

    /// Perceptron output for `pc` under the current history.
    pub fn output(&self, pc: u32) -> i64 {
        weighted_sum(self.row(self.index(pc)), self.ghr)
    }
}

impl BranchPredictor for PerceptronPredictor {
    /// Predicts taken if the perceptron output is non-negative.
    fn predict(&self, pc: u32) -> Outcome {
        Outcome::from(self.output(pc) >= 0)
    }

    /// Trains the selected row on a misprediction or when the output magnitude
    /// is within the threshold, then shifts the outcome into the GHR.
    fn train(&mut self, pc: u32, outcome: Outcome) {
        let idx = self.index(pc);
        let t = i64::from(outcome.signed());
        let y = weighted_sum(self.row(idx), self.ghr);

        let mispredicted = y.signum() * t < 0;
        if mispredicted || y.unsigned_abs() <= u64::from(self.threshold.unsigned_abs()) {
            let ghr = self.ghr;
            let base = idx * self.row_size;
            let row = &mut self.table[base..base + self.row_size];
            row[0] = row[0].saturating_add(t);
            for (i, w) in row.iter_mut().enumerate().skip(1) {
                *w = w.saturating_add(t * i64::from(signed_bit(ghr, i)));
            }
        }

        self.ghr = shift_history(self.ghr, outcome.bit(), self.ghr_mask);
    }
}
