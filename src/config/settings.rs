//! Application settings and paths.
//!
//! Manages the XDG-compliant configuration path and the optional settings
//! file. File values sit below command-line flags and above the built-in
//! defaults, which mirror the reference scan scenario (localhost, ports
//! 21-100, tcp).

use crate::error::{ConfigError, ConfigResult};
use crate::strategy::DEFAULT_WORKERS;
use crate::types::Protocol;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/trireme)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "trireme", "trireme")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
        };

        // Ensure the directory exists
        fs::create_dir_all(&paths.config_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host to scan when no target is given on the command line.
    pub host: String,
    /// Port specification, a single port or an inclusive range.
    pub ports: String,
    /// Transport protocol to probe with.
    pub protocol: Protocol,
    /// Worker count for the worker-pool strategy.
    pub workers: usize,
    /// Input queue capacity for the worker-pool strategy; the worker
    /// count when unset.
    pub queue_capacity: Option<usize>,
    /// Per-probe connect timeout in milliseconds.
    pub timeout_ms: u64,
    /// Fixed delay before each probe in milliseconds.
    pub delay_ms: u64,
    /// Default output format when no flag is given.
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            ports: "21-100".to_string(),
            protocol: Protocol::Tcp,
            workers: DEFAULT_WORKERS,
            queue_capacity: None,
            timeout_ms: 5000,
            delay_ms: 100,
            output: "plain".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.ports, "21-100");
        assert_eq!(settings.protocol, Protocol::Tcp);
        assert_eq!(settings.workers, 100);
        assert_eq!(settings.queue_capacity, None);
        assert_eq!(settings.timeout_ms, 5000);
        assert_eq!(settings.delay_ms, 100);
        assert_eq!(settings.output, "plain");
    }

    #[test]
    fn test_load_from_file_merges_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "192.168.0.5", "workers": 16}}"#).unwrap();

        let settings = Settings::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(settings.host, "192.168.0.5");
        assert_eq!(settings.workers, 16);
        // untouched fields keep their defaults
        assert_eq!(settings.ports, "21-100");
        assert_eq!(settings.timeout_ms, 5000);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Settings::load_from(&PathBuf::from("/nonexistent/trireme-settings.json"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_load_from_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let result = Settings::load_from(&file.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }
}
