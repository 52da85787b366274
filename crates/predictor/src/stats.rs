//! Prediction accuracy statistics.
//!
//! This module tracks how well a predictor did over a replay. It provides:
//! 1. **Counts:** Conditional branches seen and how many were mispredicted.
//! 2. **Derived metrics:** Misprediction rate and accuracy as percentages.
//! 3. **Reporting:** The classic three-line text report and a JSON view via serde.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::common::Outcome;
use crate::config::PredictorKind;

/// Accuracy counters for one replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimStats {
    /// Predictor the counts belong to.
    pub predictor: PredictorKind,
    /// Number of conditional branches replayed.
    pub branches: u64,
    /// Number of branches whose prediction differed from the outcome.
    pub incorrect: u64,
}

impl SimStats {
    /// Creates an empty record for `kind`.
    pub const fn new(kind: PredictorKind) -> Self {
        Self { predictor: kind, branches: 0, incorrect: 0 }
    }

    /// Records one branch given its prediction and its resolved outcome.
    #[inline]
    pub const fn record(&mut self, prediction: Outcome, outcome: Outcome) {
        self.branches += 1;
        if prediction as u8 != outcome as u8 {
            self.incorrect += 1;
        }
    }

    /// Number of correctly predicted branches.
    pub const fn correct(&self) -> u64 {
        self.branches - self.incorrect
    }

    /// Mispredictions per 100 branches; 0 for an empty trace.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * self.incorrect as f64 / self.branches as f64
        }
    }

    /// Correct predictions per 100 branches; 0 for an empty trace.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 { 0.0 } else { 100.0 - self.misprediction_rate() }
    }
}

/// Writes the report as `Branches` / `Incorrect` / `Misprediction Rate` lines.
impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branches:        {:10}", self.branches)?;
        writeln!(f, "Incorrect:       {:10}", self.incorrect)?;
        write!(f, "Misprediction Rate: {:7.3}", self.misprediction_rate())
    }
}

/// Serializes the counts plus the derived `misprediction_rate`; `predictor`
/// is written as its report name.
impl Serialize for SimStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("SimStats", 4)?;
        report.serialize_field("predictor", self.predictor.name())?;
        report.serialize_field("branches", &self.branches)?;
        report.serialize_field("incorrect", &self.incorrect)?;
        report.serialize_field("misprediction_rate", &self.misprediction_rate())?;
        report.end()
    }
}

impl SimStats {
    /// Pretty-printed JSON form of the [`Serialize`] output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
