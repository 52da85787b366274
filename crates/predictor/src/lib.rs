//! Dynamic branch direction predictor simulator library.
//!
//! This crate models table-driven branch predictors in isolation:
//! 1. **Common:** Outcome type, bit/index hashing helpers, and error types.
//! 2. **Configuration:** Predictor kind and sizing parameters with defaults and validation.
//! 3. **BRU:** Static, gshare, tournament, and perceptron predictors over shared saturating counters.
//! 4. **Engine:** The `initialize` / `predict` / `train` / `teardown` facade that owns all tables.
//! 5. **Simulation:** Trace reading, replay, and accuracy statistics.

/// Common types (outcome, bit helpers, errors).
pub mod common;
/// Predictor configuration (defaults, kind enum, sizing).
pub mod config;
/// Branch direction predictors and the saturating counter model.
pub mod bru;
/// Engine facade with explicit lifecycle checks.
pub mod engine;
/// Trace reader and replay loop.
pub mod sim;
/// Prediction accuracy statistics.
pub mod stats;

/// Outcome of a conditional branch; the value every predictor produces.
pub use crate::common::Outcome;
/// Root configuration type; use `PredictorConfig::default()` or a per-kind preset.
pub use crate::config::{PredictorConfig, PredictorKind};
/// The engine facade; construct with `Engine::with_config` or `Engine::new` + `initialize`.
pub use crate::engine::Engine;
/// Accuracy counters produced by a replay.
pub use crate::stats::SimStats;
