//! JSON output formatting.

use crate::strategy::ScanRun;
use tracing::warn;

/// Print runs as pretty JSON with outcomes sorted ascending by port.
///
/// A single run prints as one object; a multi-run session prints as an
/// array so the output stays one valid JSON document. A serialization
/// failure is logged, not fatal.
pub fn print_runs(runs: &[ScanRun]) {
    match render(runs) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("failed to serialize scan results: {}", e),
    }
}

fn render(runs: &[ScanRun]) -> serde_json::Result<String> {
    let mut sorted = runs.to_vec();
    for run in &mut sorted {
        run.sort_by_port();
    }

    if sorted.len() == 1 {
        serde_json::to_string_pretty(&sorted[0])
    } else {
        serde_json::to_string_pretty(&sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::PortState;
    use crate::strategy::PortOutcome;
    use crate::types::{Port, PortRange, Protocol, Target};
    use std::time::Duration;

    fn run() -> ScanRun {
        let range = PortRange::new(Port::new(48).unwrap(), Port::new(52).unwrap()).unwrap();
        let target = Target::new("127.0.0.1", range, Protocol::Tcp);
        // outcomes deliberately out of port order
        ScanRun::new("worker-pool", &target).finalize(
            vec![
                PortOutcome::new(Port::new(51).unwrap(), PortState::Closed),
                PortOutcome::new(Port::new(48).unwrap(), PortState::Closed),
                PortOutcome::new(Port::new(50).unwrap(), PortState::Open),
                PortOutcome::new(Port::new(52).unwrap(), PortState::Closed),
                PortOutcome::new(Port::new(49).unwrap(), PortState::Closed),
            ],
            Duration::from_millis(42),
        )
    }

    #[test]
    fn test_single_run_renders_as_object_with_sorted_outcomes() {
        let json = render(&[run()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["strategy"], "worker-pool");
        assert_eq!(value["elapsed_ms"], 42);

        let ports: Vec<u64> = value["outcomes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["port"].as_u64().unwrap())
            .collect();
        assert_eq!(ports, vec![48, 49, 50, 51, 52]);
        assert_eq!(value["outcomes"][2]["state"], "open");
    }

    #[test]
    fn test_session_renders_as_array() {
        let json = render(&[run(), run()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let runs = value.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["target"]["host"], "127.0.0.1");
    }

    #[test]
    fn test_rendering_leaves_the_run_untouched() {
        let original = run();
        let _ = render(std::slice::from_ref(&original)).unwrap();

        // arrival order preserved on the caller's copy
        assert_eq!(original.outcomes[0].port.as_u16(), 51);
    }
}
