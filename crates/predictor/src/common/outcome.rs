//! Branch outcome type.
//!
//! Every predictor answers with an [`Outcome`] and is trained with one. The
//! bit encoding (`Taken = 1`, `NotTaken = 0`) is what gets shifted into the
//! global and local history registers.

use std::fmt;

/// Resolved (or predicted) direction of a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Outcome {
    /// Branch falls through.
    #[default]
    NotTaken = 0,
    /// Branch jumps to its target.
    Taken = 1,
}

impl Outcome {
    /// History bit for this outcome: 1 for taken, 0 for not taken.
    #[inline(always)]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Decodes the low bit of `bit`; any non-zero low bit is `Taken`.
    #[inline(always)]
    pub const fn from_bit(bit: u32) -> Self {
        if bit & 1 == 1 { Self::Taken } else { Self::NotTaken }
    }

    /// Bipolar encoding used by the perceptron: +1 for taken, -1 for not taken.
    #[inline(always)]
    pub const fn signed(self) -> i32 {
        match self {
            Self::Taken => 1,
            Self::NotTaken => -1,
        }
    }

    /// Returns true for `Taken`.
    #[inline(always)]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl From<bool> for Outcome {
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_taken()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "T"),
            Self::NotTaken => write!(f, "N"),
        }
    }
}
