//! Scan strategies - three schedulings of the same probe operation.
//!
//! Every strategy probes each port in the target's range exactly once and
//! returns a [`ScanRun`] holding one [`PortOutcome`] per port. The variants
//! differ only in how the probes are scheduled:
//!
//! - [`SequentialStrategy`] probes one port at a time, in ascending order.
//! - [`ParallelStrategy`] spawns one task per port and joins them all.
//! - [`WorkerPoolStrategy`] feeds a fixed pool of workers through a bounded
//!   queue.

mod parallel;
mod sequential;
mod worker_pool;

pub use parallel::ParallelStrategy;
pub use sequential::SequentialStrategy;
pub use worker_pool::WorkerPoolStrategy;

use crate::error::ScanResult;
use crate::probe::{PortState, Probe};
use crate::types::{Port, RunId, Target};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default worker count for the pool strategy.
pub const DEFAULT_WORKERS: usize = 100;

/// Classification of a single port.
///
/// Produced exactly once per port per scan run; never mutated after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortOutcome {
    /// The port that was probed.
    pub port: Port,
    /// State the probe classified it as.
    pub state: PortState,
}

impl PortOutcome {
    /// Create a new outcome.
    pub fn new(port: Port, state: PortState) -> Self {
        Self { port, state }
    }

    /// Check if the port was classified open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

/// Complete record of one strategy's execution against one target.
///
/// A run is exclusively owned by the strategy invocation that creates it;
/// once returned it is read-only apart from [`ScanRun::sort_by_port`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRun {
    /// Unique identifier for this run.
    pub id: RunId,
    /// Name of the strategy that produced the run.
    pub strategy: String,
    /// The target that was scanned.
    pub target: Target,
    /// Wall-clock time the strategy was entered.
    pub started_at: DateTime<Utc>,
    /// Total execution time in milliseconds.
    pub elapsed_ms: u64,
    /// One outcome per port in the target's range.
    pub outcomes: Vec<PortOutcome>,
}

impl ScanRun {
    /// Create a run record at strategy entry.
    pub fn new(strategy: impl Into<String>, target: &Target) -> Self {
        Self {
            id: RunId::new(),
            strategy: strategy.into(),
            target: target.clone(),
            started_at: Utc::now(),
            elapsed_ms: 0,
            outcomes: Vec::new(),
        }
    }

    /// Attach the collected outcomes and final timing at strategy exit.
    pub fn finalize(mut self, outcomes: Vec<PortOutcome>, elapsed: Duration) -> Self {
        self.outcomes = outcomes;
        self.elapsed_ms = elapsed.as_millis() as u64;
        self
    }

    /// Sort outcomes ascending by port number.
    ///
    /// Only the sequential strategy guarantees port order on its own;
    /// consumers that need it call this first.
    pub fn sort_by_port(&mut self) {
        self.outcomes.sort_by_key(|o| o.port);
    }
}

/// Available scan strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// One probe at a time, in ascending port order.
    Sequential,
    /// One concurrent task per port, joined before returning.
    Parallel,
    /// Fixed pool of workers fed through a bounded queue.
    WorkerPool,
}

impl StrategyKind {
    /// All strategies, in the order a full session runs them.
    pub const ALL: [StrategyKind; 3] = [Self::Sequential, Self::Parallel, Self::WorkerPool];

    /// Stable name recorded in scan runs and printed in output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::WorkerPool => "worker-pool",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback invoked once per completed probe.
///
/// Called from whichever task finished the probe, so the hook must be safe
/// to share across tasks. Rendering is the caller's business; the scan core
/// itself never prints.
pub type ProgressHook = Arc<dyn Fn(&PortOutcome) + Send + Sync>;

/// Trait for scan strategy implementations.
///
/// All strategies produce the same outcome set for the same target; they
/// differ in ordering, concurrency degree, and resource bounds. This makes
/// them interchangeable behind dynamic dispatch and lets one test harness
/// cover all of them.
#[async_trait]
pub trait ScanStrategy: Send + Sync {
    /// The strategy variant this implementation provides.
    fn kind(&self) -> StrategyKind;

    /// Probe every port in the target's range and return the completed run.
    async fn execute(&self, target: &Target) -> ScanResult<ScanRun>;
}

/// Runtime options shared by every strategy.
#[derive(Clone)]
pub struct StrategyConfig {
    /// Probe used for every port.
    pub probe: Probe,
    /// Worker count for the pool strategy.
    pub workers: usize,
    /// Input queue capacity for the pool strategy; defaults to the worker
    /// count when unset.
    pub queue_capacity: Option<usize>,
    /// Optional per-probe progress callback.
    pub progress: Option<ProgressHook>,
}

impl StrategyConfig {
    /// Create a configuration with default pool sizing and no progress hook.
    pub fn new(probe: Probe) -> Self {
        Self {
            probe,
            workers: DEFAULT_WORKERS,
            queue_capacity: None,
            progress: None,
        }
    }

    /// Set the worker count for the pool strategy.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the input queue capacity for the pool strategy.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Set the progress callback.
    pub fn with_progress(mut self, progress: ProgressHook) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Instantiate the strategy implementation for `kind`.
pub fn create_strategy(kind: StrategyKind, config: StrategyConfig) -> Box<dyn ScanStrategy> {
    let StrategyConfig {
        probe,
        workers,
        queue_capacity,
        progress,
    } = config;

    match kind {
        StrategyKind::Sequential => Box::new(SequentialStrategy::new(probe).with_progress(progress)),
        StrategyKind::Parallel => Box::new(ParallelStrategy::new(probe).with_progress(progress)),
        StrategyKind::WorkerPool => Box::new(
            WorkerPoolStrategy::new(probe, workers)
                .with_queue_capacity(queue_capacity)
                .with_progress(progress),
        ),
    }
}
