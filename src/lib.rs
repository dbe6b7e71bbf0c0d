//! # Trireme - A Port Scanner in Three Concurrency Styles
//!
//! Trireme probes a target host over a range of TCP ports and classifies
//! each as open or closed, running the same probe under three
//! interchangeable scheduling strategies so their behavior can be
//! compared directly.
//!
//! ## Features
//!
//! - **Three Strategies**: sequential baseline, one-task-per-port parallel
//!   fan-out, and a fixed worker pool fed through a bounded queue
//! - **Uniform Results**: every strategy yields the same outcome set for the
//!   same target; only the scheduling differs
//! - **Binary Classification**: refused, timed out, and unreachable all
//!   report as "closed"
//! - **Progress Hooks**: the scan core never prints; renderers subscribe to
//!   per-probe callbacks
//! - **Multiple Output Formats**: styled plain text and JSON
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use trireme::probe::Probe;
//! use trireme::strategy::{ScanStrategy, WorkerPoolStrategy};
//! use trireme::types::{Port, PortRange, Protocol, Target};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let range = PortRange::new(Port::new(21).unwrap(), Port::new(100).unwrap()).unwrap();
//!     let target = Target::new("127.0.0.1", range, Protocol::Tcp);
//!
//!     let probe = Probe::new(Protocol::Tcp, Duration::from_secs(5));
//!     let strategy = WorkerPoolStrategy::new(probe, 100);
//!
//!     let run = strategy.execute(&target).await.unwrap();
//!     println!("{} outcomes in {}ms", run.outcomes.len(), run.elapsed_ms);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`probe`] - The single-port connect probe and its binary classification
//! - [`strategy`] - The three scheduling strategies behind the `ScanStrategy` trait
//! - [`report`] - Summaries and plain/JSON rendering of completed runs
//! - [`config`] - Settings file handling
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod strategy;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, ScanError};
pub use probe::{PortState, Probe};
pub use strategy::{PortOutcome, ScanRun, ScanStrategy, StrategyKind};
pub use types::{Port, PortRange, Protocol, Target};
