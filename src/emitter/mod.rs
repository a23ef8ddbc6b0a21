//! Module for turning JSON documents into graphite plaintext metric lines.
//!
//! A line reads `<prefix>.<name> <value> <timestamp>`.
//! The timestamp is taken once per run, so all lines of a run share it.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
