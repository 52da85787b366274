//! Predictor engine facade.
//!
//! The [`Engine`] is the three-call contract a trace driver uses:
//! `initialize(config)`, then `predict(pc)` / `train(pc, outcome)` per branch,
//! and finally `teardown()`. It owns exactly one predictor and every table that
//! predictor allocates. Using it while empty is reported as
//! [`EngineError::Uninitialized`] instead of being undefined.

use tracing::{debug, info};

use crate::bru::{BranchPredictor, Predictor};
use crate::common::{EngineError, Outcome};
use crate::config::{PredictorConfig, PredictorKind};

/// Owns the active predictor and checks the initialize/teardown lifecycle.
#[derive(Debug, Default)]
pub struct Engine {
    predictor: Option<Predictor>,
}

impl Engine {
    /// Creates an empty engine. Call [`initialize`](Self::initialize) before use.
    pub const fn new() -> Self {
        Self { predictor: None }
    }

    /// Creates an engine and initializes it with `config`.
    pub fn with_config(config: &PredictorConfig) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.initialize(config)?;
        Ok(engine)
    }

    /// Allocates the tables for `config.kind`, replacing any previous predictor.
    ///
    /// On a configuration error the engine is left as it was.
    pub fn initialize(&mut self, config: &PredictorConfig) -> Result<(), EngineError> {
        let predictor = Predictor::new(config).inspect_err(|err| {
            debug!(%config, %err, "rejected predictor configuration");
        })?;
        info!(
            kind = %config.kind,
            ghistory_bits = config.ghistory_bits,
            lhistory_bits = config.lhistory_bits,
            pc_index_bits = config.pc_index_bits,
            theta = config.theta,
            "predictor initialized"
        );
        self.predictor = Some(predictor);
        Ok(())
    }

    /// Predicts the direction of the branch at `pc`.
    #[inline]
    pub fn predict(&self, pc: u32) -> Result<Outcome, EngineError> {
        self.predictor
            .as_ref()
            .map(|bp| bp.predict(pc))
            .ok_or(EngineError::Uninitialized)
    }

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    #[inline]
    pub fn train(&mut self, pc: u32, outcome: Outcome) -> Result<(), EngineError> {
        let bp = self.predictor.as_mut().ok_or(EngineError::Uninitialized)?;
        bp.train(pc, outcome);
        Ok(())
    }

    /// Releases every table. Safe to call repeatedly or on an empty engine.
    pub fn teardown(&mut self) {
        if let Some(bp) = self.predictor.take() {
            debug!(kind = %bp.kind(), "predictor torn down");
        }
    }

    /// Returns true between a successful `initialize` and `teardown`.
    pub const fn is_initialized(&self) -> bool {
        self.predictor.is_some()
    }

    /// Kind of the active predictor, if any.
    pub fn kind(&self) -> Option<PredictorKind> {
        self.predictor.as_ref().map(Predictor::kind)
    }

    /// Borrows the active predictor for inspection.
    pub const fn predictor(&self) -> Option<&Predictor> {
        self.predictor.as_ref()
    }
}
