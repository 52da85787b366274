//! Error definitions.
//!
//! This module defines the error types of the engine. It provides:
//! 1. **Configuration Errors:** Rejected predictor kinds and sizing parameters, reported at `initialize`.
//! 2. **Engine Errors:** Lifecycle violations (using an engine that holds no predictor).
//! 3. **Trace Errors:** I/O failures and malformed lines while reading a branch trace.
//! 4. **Simulation Errors:** Either of the above, surfaced by a replay.

use thiserror::Error;

use crate::config::PredictorKind;

/// Errors raised while validating or parsing a predictor configuration.
///
/// A configuration error prevents any table from being allocated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A size parameter required by the selected kind is zero or negative.
    #[error("{kind} predictor requires {field} > 0, got {value}")]
    NonPositiveSize {
        /// Predictor kind being configured.
        kind: PredictorKind,
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: i32,
    },

    /// A size parameter would produce a table larger than the engine supports.
    #[error("{kind} predictor requires {field} <= {max}, got {value}")]
    SizeTooLarge {
        /// Predictor kind being configured.
        kind: PredictorKind,
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// The perceptron training threshold is negative.
    #[error("custom predictor requires theta >= 0, got {0}")]
    NegativeThreshold(i32),

    /// The predictor name is not one of the supported kinds.
    #[error("unsupported predictor kind `{0}` (expected static, gshare, tournament or custom)")]
    UnknownPredictor(String),

    /// A field of a predictor spec string could not be parsed.
    #[error("invalid value `{value}` for {field}")]
    InvalidField {
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// A JSON configuration document could not be deserialized.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the [`Engine`](crate::engine::Engine) facade.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `predict` or `train` was called before `initialize` or after `teardown`.
    #[error("predictor engine is not initialized")]
    Uninitialized,

    /// `initialize` rejected the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while reading a branch trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not have the `<hex pc> <0|1>` shape.
    #[error("malformed trace line {line}: `{content}` ({reason})")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Errors raised while replaying a trace through an engine.
#[derive(Debug, Error)]
pub enum SimError {
    /// The trace could not be read.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The engine could not be initialized or was used while empty.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        Self::Engine(EngineError::Config(err))
    }
}
