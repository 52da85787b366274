//! Trace-driven simulation.
//!
//! This module is the driver side of the engine contract:
//! 1. **Trace:** Reads `(pc, outcome)` records from text traces.
//! 2. **Replay:** Feeds records through an engine one branch at a time and scores them.

/// Replay loop producing accuracy statistics.
pub mod replay;

/// Text trace reader.
pub mod trace;

pub use replay::{replay, run};
pub use trace::{BranchRecord, TraceReader};
