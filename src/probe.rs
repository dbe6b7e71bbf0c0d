//! Single-port TCP probing.
//!
//! A probe attempts a full connect handshake against one port and reduces
//! the outcome to a binary state. Connection refused, timeouts, unreachable
//! networks, and resolution failures all collapse to [`PortState::Closed`];
//! only a completed handshake counts as open.

use crate::types::{Port, Protocol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use tracing::trace;

/// State of a probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// Port is open (service accepted the connection).
    Open,
    /// Port is closed or otherwise unreachable.
    Closed,
}

impl PortState {
    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A configured port probe.
///
/// Cheap to copy; every scan strategy shares one probe across all of its
/// tasks. An optional fixed delay before each connect keeps probe pacing
/// observable when watching a scan run live.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    protocol: Protocol,
    timeout: Duration,
    delay: Duration,
}

impl Probe {
    /// Create a new probe with the given protocol and connect timeout.
    pub fn new(protocol: Protocol, timeout: Duration) -> Self {
        Self {
            protocol,
            timeout,
            delay: Duration::ZERO,
        }
    }

    /// Set a fixed delay applied before each connection attempt.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get the configured connect timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the configured pre-connect delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Probe a single port and classify it.
    ///
    /// Never fails: any error on the way to a completed handshake is
    /// reported as [`PortState::Closed`].
    pub async fn classify(&self, host: &str, port: Port) -> PortState {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.protocol {
            Protocol::Tcp => self.connect_tcp(host, port).await,
        }
    }

    async fn connect_tcp(&self, host: &str, port: Port) -> PortState {
        match timeout(self.timeout, TcpStream::connect((host, port.as_u16()))).await {
            Ok(Ok(stream)) => {
                drop(stream);
                trace!("{}:{} accepted connection", host, port);
                PortState::Open
            }
            Ok(Err(e)) => {
                trace!("{}:{} connect failed: {}", host, port, e);
                PortState::Closed
            }
            Err(_) => {
                trace!("{}:{} connect timed out", host, port);
                PortState::Closed
            }
        }
    }
}
