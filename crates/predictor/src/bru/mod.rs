//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction predictors the engine can run: static,
//! gshare, tournament, and perceptron, plus the 2-bit saturating counter they
//! share.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// 2-bit saturating counter state machine and table initializers.
pub mod counter;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Perceptron-based branch predictor (the custom predictor).
pub mod perceptron;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use self::{
    gshare::GSharePredictor, perceptron::PerceptronPredictor, static_bp::StaticPredictor,
    tournament::TournamentPredictor,
};
use crate::common::{ConfigError, Outcome};
use crate::config::{PredictorConfig, PredictorKind};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Each variant owns only the tables its algorithm needs.
#[derive(Debug, Clone)]
pub enum Predictor {
    /// Always taken.
    Static(StaticPredictor),
    /// Global history XOR PC.
    GShare(GSharePredictor),
    /// Local/global hybrid with a selector.
    Tournament(TournamentPredictor),
    /// Perceptron over global history.
    Custom(PerceptronPredictor),
}

impl Predictor {
    /// Creates the predictor selected by `config.kind`.
    ///
    /// Validates the configuration first; nothing is allocated on error.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(match config.kind {
            PredictorKind::Static => Self::Static(StaticPredictor::new()),
            PredictorKind::Gshare => {
                Self::GShare(GSharePredictor::new(config.ghistory_bits, config.counter_init)?)
            }
            PredictorKind::Tournament => Self::Tournament(TournamentPredictor::new(
                config.ghistory_bits,
                config.lhistory_bits,
                config.pc_index_bits,
                config.counter_init,
            )?),
            PredictorKind::Custom => {
                Self::Custom(PerceptronPredictor::new(config.ghistory_bits, config.theta)?)
            }
        })
    }

    /// Kind of the wrapped predictor.
    pub const fn kind(&self) -> PredictorKind {
        match self {
            Self::Static(_) => PredictorKind::Static,
            Self::GShare(_) => PredictorKind::Gshare,
            Self::Tournament(_) => PredictorKind::Tournament,
            Self::Custom(_) => PredictorKind::Custom,
        }
    }
}

impl BranchPredictor for Predictor {
    #[inline(always)]
    fn predict(&self, pc: u32) -> Outcome {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Custom(bp) => bp.predict(pc),
        }
    }

    #[inline(always)]
    fn train(&mut self, pc: u32, outcome: Outcome) {
        match self {
            Self::Static(bp) => bp.train(pc, outcome),
            Self::GShare(bp) => bp.train(pc, outcome),
            Self::Tournament(bp) => bp.train(pc, outcome),
            Self::Custom(bp) => bp.train(pc, outcome),
        }
    }
}
