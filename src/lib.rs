pub mod error;
pub mod config;
pub mod fetcher;
pub mod emitter;
pub mod collector;

pub use error::CollectError;
