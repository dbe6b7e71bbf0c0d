//! Worker-pool scan strategy.
//!
//! A producer task enqueues ports into a bounded queue and a fixed pool of
//! workers drains it, pushing classified outcomes onto an unbounded output
//! channel. The bounded queue gives backpressure: the producer blocks while
//! the queue is full, capping in-flight work no matter how large the port
//! range is. Termination is count-based; the consumer knows exactly how
//! many outcomes to expect and never needs a sentinel.

use crate::error::{ScanError, ScanResult};
use crate::probe::Probe;
use crate::strategy::{PortOutcome, ProgressHook, ScanRun, ScanStrategy, StrategyKind};
use crate::types::{Port, Target};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// Probes ports with a fixed pool of workers fed through a bounded queue.
pub struct WorkerPoolStrategy {
    probe: Probe,
    workers: usize,
    queue_capacity: Option<usize>,
    progress: Option<ProgressHook>,
}

impl WorkerPoolStrategy {
    /// Create a pool strategy with the given worker count.
    ///
    /// A worker count of zero is coerced to one so the pool can always
    /// make progress.
    pub fn new(probe: Probe, workers: usize) -> Self {
        Self {
            probe,
            workers: workers.max(1),
            queue_capacity: None,
            progress: None,
        }
    }

    /// Bound the input queue explicitly; defaults to the worker count.
    pub fn with_queue_capacity(mut self, capacity: Option<usize>) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the progress callback.
    pub fn with_progress(mut self, progress: Option<ProgressHook>) -> Self {
        self.progress = progress;
        self
    }

    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Effective input queue capacity.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(self.workers).max(1)
    }
}

#[async_trait]
impl ScanStrategy for WorkerPoolStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::WorkerPool
    }

    async fn execute(&self, target: &Target) -> ScanResult<ScanRun> {
        let run = ScanRun::new(self.kind().name(), target);
        let started = Instant::now();

        let expected = target.ports.len();
        let (port_tx, port_rx) = mpsc::channel::<Port>(self.queue_capacity());
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<PortOutcome>();
        let port_rx = Arc::new(Mutex::new(port_rx));

        let ports = target.ports;
        let producer = tokio::spawn(async move {
            for port in ports.iter() {
                // blocks while the queue is full (backpressure)
                if port_tx.send(port).await.is_err() {
                    break;
                }
            }
        });

        let mut workers = Vec::with_capacity(self.workers);
        for _ in 0..self.workers {
            let port_rx = Arc::clone(&port_rx);
            let out_tx = out_tx.clone();
            let probe = self.probe;
            let host = target.host.clone();
            let progress = self.progress.clone();

            workers.push(tokio::spawn(async move {
                loop {
                    // hold the receiver lock for the dequeue only, never
                    // across the probe
                    let port = { port_rx.lock().await.recv().await };
                    let port = match port {
                        Some(port) => port,
                        None => break,
                    };

                    let state = probe.classify(&host, port).await;
                    let outcome = PortOutcome::new(port, state);

                    if let Some(hook) = &progress {
                        hook(&outcome);
                    }
                    if out_tx.send(outcome).is_err() {
                        break;
                    }
                }
            }));
        }

        // the workers now hold the only senders, so the output channel
        // closes once every worker exits; a dying pool can never strand
        // the consumer below
        drop(out_tx);

        let mut outcomes = Vec::with_capacity(expected);
        while outcomes.len() < expected {
            match out_rx.recv().await {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }

        // give up our receiver handle as well: once the workers' clones
        // are gone the input channel closes and a producer still blocked
        // on a full queue gets its send error instead of waiting forever
        drop(port_rx);

        producer
            .await
            .map_err(|e| ScanError::TaskPanicked(e.to_string()))?;
        for worker in workers {
            worker
                .await
                .map_err(|e| ScanError::TaskPanicked(e.to_string()))?;
        }

        if outcomes.len() != expected {
            return Err(ScanError::ResultsTruncated {
                expected,
                received: outcomes.len(),
            });
        }

        debug!(
            "worker-pool strategy probed {} ports with {} workers",
            outcomes.len(),
            self.workers
        );
        Ok(run.finalize(outcomes, started.elapsed()))
    }
}
