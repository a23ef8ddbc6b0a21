//! Module for reading JSON documents from the RabbitMQ management API.
//!
//! The management API lives at `http://<host>:<port>/api`, default port 15672,
//! and requires basic authentication.
//! The default `guest` user can only log in from localhost.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
