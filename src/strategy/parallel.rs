//! Bounded-parallel scan strategy.
//!
//! Spawns one task per port, so the concurrency degree equals the size of
//! the port range. All tasks append into one shared collection guarded by
//! a single lock; the lock covers only the append, never the probe, so the
//! network waits still overlap. This unbounded fan-out is the deliberate
//! contrast point against the pool strategy's fixed worker count.

use crate::error::{ScanError, ScanResult};
use crate::probe::Probe;
use crate::strategy::{PortOutcome, ProgressHook, ScanRun, ScanStrategy, StrategyKind};
use crate::types::Target;
use async_trait::async_trait;
use futures::future::join_all;
use std::mem;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::debug;

/// Probes every port on its own task, joined before returning.
pub struct ParallelStrategy {
    probe: Probe,
    progress: Option<ProgressHook>,
}

impl ParallelStrategy {
    /// Create a new parallel strategy.
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
impl ScanStrategy for ParallelStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Parallel
    }

    async fn execute(&self, target: &Target) -> ScanResult<ScanRun> {
        let run = ScanRun::new(self.kind().name(), target);
        let started = Instant::now();

        let total = target.ports.len();
        let outcomes = Arc::new(Mutex::new(Vec::with_capacity(total)));
        let mut handles = Vec::with_capacity(total);

        for port in target.ports.iter() {
            let probe = self.probe;
            let host = target.host.clone();
            let progress = self.progress.clone();
            let outcomes = Arc::clone(&outcomes);

            handles.push(tokio::spawn(async move {
                let state = probe.classify(&host, port).await;
                let outcome = PortOutcome::new(port, state);

                if let Some(hook) = &progress {
                    hook(&outcome);
                }
                // lock held only for the append, never across the probe
                outcomes.lock().await.push(outcome);
            }));
        }

        // join barrier: every task completes before the run is finalized
        for joined in join_all(handles).await {
            joined.map_err(|e| ScanError::TaskPanicked(e.to_string()))?;
        }

        let outcomes = mem::take(&mut *outcomes.lock().await);
        debug!(
            "parallel strategy probed {} ports on {} tasks",
            outcomes.len(),
            total
        );
        Ok(run.finalize(outcomes, started.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Port, PortRange, Protocol};
    use std::collections::HashSet;
    use std::time::Duration;

    fn target(start: u16, end: u16) -> Target {
        let range = PortRange::new(Port::new(start).unwrap(), Port::new(end).unwrap()).unwrap();
        Target::new("127.0.0.1", range, Protocol::Tcp)
    }

    #[test]
    fn test_kind() {
        let strategy = ParallelStrategy::new(Probe::new(Protocol::Tcp, Duration::from_secs(1)));
        assert_eq!(strategy.kind(), StrategyKind::Parallel);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_wide_fan_out_covers_every_port() {
        let strategy =
            ParallelStrategy::new(Probe::new(Protocol::Tcp, Duration::from_millis(500)));
        let run = strategy.execute(&target(20080, 20099)).await.unwrap();

        assert_eq!(run.outcomes.len(), 20);
        let ports: HashSet<u16> = run.outcomes.iter().map(|o| o.port.as_u16()).collect();
        assert_eq!(ports.len(), 20);
        assert_eq!(run.strategy, "parallel");
    }
}
