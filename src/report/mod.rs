//! Result aggregation and output formatting.
//!
//! Consumes completed [`ScanRun`]s after the strategies are done with
//! them: summarizes outcomes for human-readable output and serializes
//! whole runs for machine consumption. The scan core itself never prints;
//! everything the user sees comes from here.

mod json_format;
mod plain;

pub use json_format::print_runs;
pub use plain::{print_run, print_session_header};

use crate::strategy::ScanRun;
use crate::types::Port;

/// Aggregated view of one run's outcomes.
///
/// Summarizing is pure over the outcome collection: the same run always
/// produces the same counts and the same sorted open-port listing, in
/// whatever order the outcomes arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Open ports in ascending order.
    pub open_ports: Vec<Port>,
    /// Number of ports classified closed.
    pub closed_count: usize,
}

impl Summary {
    /// Summarize a completed run.
    pub fn from_run(run: &ScanRun) -> Self {
        let mut open_ports: Vec<Port> = run
            .outcomes
            .iter()
            .filter(|o| o.is_open())
            .map(|o| o.port)
            .collect();
        open_ports.sort_unstable();

        let closed_count = run.outcomes.len() - open_ports.len();

        Self {
            open_ports,
            closed_count,
        }
    }

    /// Number of ports classified open.
    pub fn open_count(&self) -> usize {
        self.open_ports.len()
    }
}
