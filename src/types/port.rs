//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` is an inclusive, contiguous span of ports, the unit a scan
//! operates on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Create a Port without validation. Use only when the value is known
    /// to be in range.
    #[inline]
    pub const fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u16),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// An inclusive range of ports.
///
/// Construction enforces `start <= end`, so a `PortRange` always contains
/// at least one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// First port in the range.
    pub const fn start(&self) -> Port {
        self.start
    }

    /// Last port in the range.
    pub const fn end(&self) -> Port {
        self.end
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0 + 1) as usize
    }

    /// Check if the range is empty (never true for valid ranges).
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        let start = self.start.0;
        let end = self.end.0;
        (start..=end).map(Port::new_unchecked)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for PortRange {
    type Err = PortError;

    /// Parse a range specification: a single port (`"80"`) or an inclusive
    /// span (`"21-100"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }

        if let Some((lo, hi)) = s.split_once('-') {
            let start: u16 = lo
                .trim()
                .parse()
                .map_err(|_| PortError::InvalidFormat(lo.to_string()))?;
            let end: u16 = hi
                .trim()
                .parse()
                .map_err(|_| PortError::InvalidFormat(hi.to_string()))?;

            let start = Port::new(start).ok_or(PortError::OutOfRange(start))?;
            let end = Port::new(end).ok_or(PortError::OutOfRange(end))?;
            Self::new(start, end)
        } else {
            let port: u16 = s
                .parse()
                .map_err(|_| PortError::InvalidFormat(s.to_string()))?;
            let port = Port::new(port).ok_or(PortError::OutOfRange(port))?;
            Ok(Self::single(port))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
    }

    #[test]
    fn test_port_range() {
        let start = Port::new(1).unwrap();
        let end = Port::new(100).unwrap();
        let range = PortRange::new(start, end).unwrap();
        assert_eq!(range.len(), 100);
        assert_eq!(range.start().as_u16(), 1);
        assert_eq!(range.end().as_u16(), 100);
    }

    #[test]
    fn test_port_range_rejects_inverted() {
        let start = Port::new(100).unwrap();
        let end = Port::new(1).unwrap();
        assert!(matches!(
            PortRange::new(start, end),
            Err(PortError::InvalidRange(100, 1))
        ));
    }

    #[test]
    fn test_single_port_range() {
        let range = PortRange::single(Port::new(443).unwrap());
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().count(), 1);
        assert_eq!(range.to_string(), "443");
    }

    #[test]
    fn test_range_iteration_ascending() {
        let range: PortRange = "21-25".parse().unwrap();
        let ports: Vec<u16> = range.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_range_parsing() {
        let range: PortRange = "80".parse().unwrap();
        assert_eq!(range.len(), 1);

        let range: PortRange = "21-100".parse().unwrap();
        assert_eq!(range.len(), 80);
        assert_eq!(range.to_string(), "21-100");

        let range: PortRange = " 1 - 5 ".parse().unwrap();
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_range_parsing_errors() {
        assert!(matches!("".parse::<PortRange>(), Err(PortError::Empty)));
        assert!(matches!(
            "abc".parse::<PortRange>(),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(matches!(
            "100-50".parse::<PortRange>(),
            Err(PortError::InvalidRange(100, 50))
        ));
        assert!(matches!(
            "0-50".parse::<PortRange>(),
            Err(PortError::OutOfRange(0))
        ));
    }
}
