//! Trace replay loop.
//!
//! Drives an [`Engine`] over a sequence of resolved branches: for each record
//! the engine predicts, the prediction is scored against the real outcome, and
//! the engine is trained. One branch is fully resolved before the next is read.

use tracing::{info, trace};

use super::trace::BranchRecord;
use crate::common::{EngineError, SimError, TraceError};
use crate::config::PredictorConfig;
use crate::engine::Engine;
use crate::stats::SimStats;

/// Replays `records` through an already initialized `engine`.
///
/// Stops at the first trace error. The engine keeps its trained state
/// afterwards, so several traces can be replayed back to back.
pub fn replay<I>(engine: &mut Engine, records: I) -> Result<SimStats, SimError>
where
    I: IntoIterator<Item = Result<BranchRecord, TraceError>>,
{
    let kind = engine.kind().ok_or(EngineError::Uninitialized)?;
    let mut stats = SimStats::new(kind);

    for record in records {
        let BranchRecord { pc, outcome } = record?;
        let prediction = engine.predict(pc)?;
        trace!(pc = format_args!("{pc:#x}"), %prediction, %outcome, "branch");
        stats.record(prediction, outcome);
        engine.train(pc, outcome)?;
    }

    info!(
        predictor = %kind,
        branches = stats.branches,
        incorrect = stats.incorrect,
        misprediction_rate = stats.misprediction_rate(),
        "replay finished"
    );
    Ok(stats)
}

/// Builds an engine for `config`, replays `records`, and tears the engine down.
pub fn run<I>(config: &PredictorConfig, records: I) -> Result<SimStats, SimError>
where
    I: IntoIterator<Item = Result<BranchRecord, TraceError>>,
{
    let mut engine = Engine::with_config(config)?;
    let stats = replay(&mut engine, records);
    engine.teardown();
    stats
}
