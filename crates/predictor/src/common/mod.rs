//! Common utilities and types shared across the predictor engine.
//!
//! This module provides the building blocks every predictor relies on:
//! 1. **Outcome:** The taken/not-taken value type and its bit encoding.
//! 2. **Bits:** Mask construction, power-of-two sizing, and PC/history hashing.
//! 3. **Error Handling:** Configuration, engine lifecycle, trace, and replay errors.

/// Mask, power-of-two, and index hashing helpers.
pub mod bits;

/// Error types for configuration, engine lifecycle, trace parsing, and replay.
pub mod error;

/// Branch outcome type.
pub mod outcome;

pub use bits::{index_from, index_from_ghr_only, index_from_pc_only, mask_of, pow2};
pub use error::{ConfigError, EngineError, SimError, TraceError};
pub use outcome::Outcome;
