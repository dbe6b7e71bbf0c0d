//! Command-line interface definitions for Trireme.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags
//! override settings-file values, which override the built-in defaults.

use crate::config::Settings;
use crate::error::{CliResult, ConfigError};
use crate::probe::Probe;
use crate::report;
use crate::strategy::{create_strategy, ProgressHook, StrategyConfig, StrategyKind};
use crate::types::{PortRange, Protocol, Target};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A TCP port scanner comparing three concurrency strategies.
#[derive(Parser, Debug)]
#[command(name = "trireme")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A port scanner with sequential, parallel, and worker-pool strategies", long_about = None)]
pub struct Args {
    /// Target host to scan (IP address or hostname)
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// Ports to scan, a single port or an inclusive range (e.g., "80", "21-100")
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Transport protocol to probe with
    #[arg(long, value_enum)]
    pub protocol: Option<Protocol>,

    /// Strategy to run; all three run back to back when omitted
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Worker count for the worker-pool strategy
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Input queue capacity for the worker-pool strategy (defaults to the worker count)
    #[arg(long, value_name = "N")]
    pub queue_capacity: Option<usize>,

    /// Connection timeout in milliseconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Fixed delay before each probe in milliseconds
    #[arg(long)]
    pub delay: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (show per-probe progress)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Args {
    /// Execute a scan session: one strategy if one was asked for, or all
    /// three back to back.
    pub async fn execute(self) -> CliResult<()> {
        let settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };

        // Flags win over file values, file values over defaults
        let ports: PortRange = self
            .ports
            .as_deref()
            .unwrap_or(settings.ports.as_str())
            .parse()?;
        let protocol = self.protocol.unwrap_or(settings.protocol);
        let workers = self.workers.unwrap_or(settings.workers);
        let queue_capacity = self.queue_capacity.or(settings.queue_capacity);
        let timeout = Duration::from_millis(self.timeout.unwrap_or(settings.timeout_ms));
        let delay = Duration::from_millis(self.delay.unwrap_or(settings.delay_ms));
        let host = self.host.unwrap_or(settings.host);
        let output = match self.output {
            Some(format) => format,
            None => OutputFormat::from_str(&settings.output, true).map_err(|_| {
                ConfigError::InvalidFormat(format!("unknown output format: {}", settings.output))
            })?,
        };

        let target = Target::new(host, ports, protocol);
        let probe = Probe::new(protocol, timeout).with_delay(delay);

        let kinds: Vec<StrategyKind> = match self.strategy {
            Some(kind) => vec![kind],
            None => StrategyKind::ALL.to_vec(),
        };

        if !self.quiet && output == OutputFormat::Plain {
            report::print_session_header(&target);
        }

        let mut runs = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let mut config = StrategyConfig::new(probe).with_workers(workers);
            if let Some(capacity) = queue_capacity {
                config = config.with_queue_capacity(capacity);
            }

            let progress = if self.verbose {
                let (bar, hook) = progress_bar(target.ports.len() as u64);
                config = config.with_progress(hook);
                Some(bar)
            } else {
                None
            };

            info!("running {} strategy against {}", kind, target);
            let run = create_strategy(kind, config).execute(&target).await?;

            if let Some(bar) = progress {
                bar.finish_with_message("Scan complete");
            }

            if output == OutputFormat::Plain {
                report::print_run(&run, self.quiet)?;
            }
            runs.push(run);
        }

        if output == OutputFormat::Json {
            report::print_runs(&runs);
        }

        Ok(())
    }
}

/// Build a progress bar plus the hook that drives it from the scan core.
fn progress_bar(total: u64) -> (ProgressBar, ProgressHook) {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let hook: ProgressHook = {
        let bar = bar.clone();
        Arc::new(move |outcome| {
            bar.inc(1);
            if outcome.is_open() {
                bar.set_message(format!("Found open port: {}", outcome.port));
            }
        })
    };

    (bar, hook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_invocation() {
        let args = Args::try_parse_from(["trireme"]).unwrap();
        assert_eq!(args.host, None);
        assert_eq!(args.ports, None);
        assert_eq!(args.strategy, None);
        assert_eq!(args.output, None);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = Args::try_parse_from([
            "trireme",
            "10.0.0.7",
            "-p",
            "1-1024",
            "--protocol",
            "tcp",
            "-s",
            "worker-pool",
            "-w",
            "32",
            "--queue-capacity",
            "64",
            "-t",
            "2500",
            "--delay",
            "0",
            "-o",
            "json",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.host.as_deref(), Some("10.0.0.7"));
        assert_eq!(args.ports.as_deref(), Some("1-1024"));
        assert_eq!(args.protocol, Some(Protocol::Tcp));
        assert_eq!(args.strategy, Some(StrategyKind::WorkerPool));
        assert_eq!(args.workers, Some(32));
        assert_eq!(args.queue_capacity, Some(64));
        assert_eq!(args.timeout, Some(2500));
        assert_eq!(args.delay, Some(0));
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_strategy_names() {
        for (name, kind) in [
            ("sequential", StrategyKind::Sequential),
            ("parallel", StrategyKind::Parallel),
            ("worker-pool", StrategyKind::WorkerPool),
        ] {
            let args = Args::try_parse_from(["trireme", "-s", name]).unwrap();
            assert_eq!(args.strategy, Some(kind));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["trireme", "-s", "quantum"]).is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_output_format_parses_settings_values() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_str("Plain", true).unwrap(),
            OutputFormat::Plain
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}
