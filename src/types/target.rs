//! Scan target description.
//!
//! A `Target` binds the host, the port range, and the transport protocol
//! for one scan. It is assembled before a strategy starts and never
//! changes while the scan executes; name resolution is left to the
//! connect primitive at probe time.

use crate::types::{PortRange, Protocol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The host and port range a scan is directed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Host to probe (IP address or name; resolved by the socket layer).
    pub host: String,
    /// Inclusive range of ports to probe.
    pub ports: PortRange,
    /// Transport protocol used for every probe.
    pub protocol: Protocol,
}

impl Target {
    /// Create a new target.
    pub fn new(host: impl Into<String>, ports: PortRange, protocol: Protocol) -> Self {
        Self {
            host: host.into(),
            ports,
            protocol,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.host, self.protocol, self.ports)
    }
}
