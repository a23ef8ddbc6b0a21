//! The error type shared by the fetcher, the emitter and the collector.
//!
use thiserror::Error;

/// Every way a collection run can fail.
///
/// None of these are recovered from: a run either prints all metrics of a phase, or fails.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("request to `{url}` failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to `{url}` returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response from `{url}` is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field `{0}` not found")]
    MissingField(String),

    #[error("field `{field}` is {kind}, expected a number or a string")]
    UnsupportedValue {
        field: String,
        kind: &'static str,
    },

    #[error("writing metrics failed")]
    Output(#[from] std::io::Error),
}
