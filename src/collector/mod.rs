//! Module for a collection run: `/api/overview` first, then `/api/nodes/<node>`.
//!
//! The overview reports cluster wide totals, and the name of the node that answered.
//! That node name is used unchanged to read the node statistics.
//!
//! Each phase is resolved completely before it is written,
//! so a failure prints nothing for the phase it happened in.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
