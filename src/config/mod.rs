//! Configuration management for Trireme.
//!
//! Provides XDG-compliant configuration storage: an optional settings
//! file whose values sit below command-line flags and above the built-in
//! defaults.

mod settings;

pub use settings::{Paths, Settings};
