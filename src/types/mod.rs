//! Core type definitions using newtype patterns for type safety.
//!
//! Out-of-range port numbers and inverted ranges are rejected at
//! construction, so the scan code never re-validates them.

mod port;
mod protocol;
mod run_id;
mod target;

pub use port::{Port, PortError, PortRange};
pub use protocol::{Protocol, ProtocolError};
pub use run_id::RunId;
pub use target::Target;
