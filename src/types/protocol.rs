//! Transport protocol identifier.
//!
//! The scan's connect primitive decides what a protocol means; only
//! transports with connection semantics are accepted, so "open" and
//! "closed" stay meaningful classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported transport protocols for probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP connect probing (no special privileges required).
    Tcp,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Tcp
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

/// Error type for protocol parsing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported protocol: {0} (expected \"tcp\")")]
pub struct ProtocolError(String);

impl FromStr for Protocol {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            other => Err(ProtocolError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("tcp".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert_eq!("TCP".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert!("udp".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_protocol_display() {
        assert_eq!(Protocol::Tcp.to_string(), "tcp");
    }
}
