//! Module for the settings of a run.
//!
//! Every setting can be set:
//! - on the command line,
//! - via an environment variable, which can be put in a `.env` file in the current directory,
//! - or is taken from the defaults, which match a standard local RabbitMQ installation.
//!
//! With `--write-dotenv`, settings that were set on the command line or in the environment
//! are written to `.env`, so a subsequent run picks them up.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
