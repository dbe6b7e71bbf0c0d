//! Sequential scan strategy.
//!
//! Probes one port at a time in ascending order on a single task. Total
//! wall time is the sum of per-probe latencies, which makes this the
//! correctness and performance baseline the concurrent strategies are
//! compared against.

use crate::error::ScanResult;
use crate::probe::Probe;
use crate::strategy::{PortOutcome, ProgressHook, ScanRun, ScanStrategy, StrategyKind};
use crate::types::Target;
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

/// Probes every port in order, one at a time.
pub struct SequentialStrategy {
    probe: Probe,
    progress: Option<ProgressHook>,
}

impl SequentialStrategy {
    /// Create a new sequential strategy.
    pub fn new(probe: Probe) -> Self {
        Self {
            probe,
            progress: None,
        }
    }

    /// Set the progress callback.
    pub fn with_progress(mut self, progress: Option<ProgressHook>) -> Self {
        self.progress = progress;
        self
    }
}

#[async_trait]
impl ScanStrategy for SequentialStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Sequential
    }

    async fn execute(&self, target: &Target) -> ScanResult<ScanRun> {
        let run = ScanRun::new(self.kind().name(), target);
        let started = Instant::now();

        let mut outcomes = Vec::with_capacity(target.ports.len());
        for port in target.ports.iter() {
            let state = self.probe.classify(&target.host, port).await;
            let outcome = PortOutcome::new(port, state);

            if let Some(hook) = &self.progress {
                hook(&outcome);
            }
            outcomes.push(outcome);
        }

        debug!("sequential strategy probed {} ports", outcomes.len());
        Ok(run.finalize(outcomes, started.elapsed()))
    }
}
