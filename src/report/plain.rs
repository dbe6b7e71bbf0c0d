//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::report::Summary;
use crate::strategy::ScanRun;
use crate::types::Target;
use console::style;
use std::io::{self, Write};

/// Print the header shown once before a scan session begins.
pub fn print_session_header(target: &Target) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("Trireme").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(&target.host).white().bold()
    );
    println!(
        "{} Ports: {} ({} ports), protocol {}",
        style("•").dim(),
        style(target.ports).white().bold(),
        target.ports.len(),
        target.protocol
    );
}

/// Print one completed run: header, statistics, and the open-port table.
///
/// `quiet` drops the run header and the timing line, leaving the counts
/// and the open-port table.
pub fn print_run(run: &ScanRun, quiet: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = Summary::from_run(run);

    writeln!(out)?;
    if quiet {
        writeln!(
            out,
            "  {} open, {} closed",
            style(summary.open_count()).green().bold(),
            style(summary.closed_count).red()
        )?;
    } else {
        // Run header
        writeln!(
            out,
            "{}",
            style("───────────────────────────────────────────────────────────────").dim()
        )?;
        writeln!(
            out,
            "  {} {}",
            style("Strategy:").bold(),
            style(&run.strategy).yellow()
        )?;
        writeln!(
            out,
            "  {} {}",
            style("Started:").bold(),
            run.started_at.format("%Y-%m-%d %H:%M:%S %Z")
        )?;
        writeln!(
            out,
            "  {} {}",
            style("Run ID:").bold(),
            style(run.id.short()).dim()
        )?;
        writeln!(out)?;

        // Statistics
        writeln!(
            out,
            "  {} {} ports scanned in {:.2}s",
            style("Summary:").bold(),
            run.outcomes.len(),
            run.elapsed_ms as f64 / 1000.0
        )?;
        writeln!(
            out,
            "           {} open, {} closed",
            style(summary.open_count()).green().bold(),
            style(summary.closed_count).red()
        )?;
    }

    // Open-port table
    writeln!(out)?;
    if summary.open_ports.is_empty() {
        writeln!(
            out,
            "  {}",
            style("No open ports. Host may be down or blocking all connections.").dim()
        )?;
    } else {
        writeln!(
            out,
            "  {:>10}  {}",
            style("PORT").bold(),
            style("STATE").bold()
        )?;
        for port in &summary.open_ports {
            writeln!(
                out,
                "  {:>10}  {}",
                format!("{}/{}", run.target.protocol, port),
                style("open").green().bold()
            )?;
        }
    }

    Ok(())
}
