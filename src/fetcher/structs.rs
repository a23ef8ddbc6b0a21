use serde_json::Value;
use crate::config::ApiConfig;
use crate::error::CollectError;

/// A source of JSON documents, addressed by the path below the API root.
pub trait Fetch {
    fn fetch(&self, path: &str) -> Result<Value, CollectError>;
}

/// Reads documents over HTTP with basic authentication.
#[derive(Debug)]
pub struct HttpFetcher {
    pub api: ApiConfig,
    pub(crate) client: reqwest::blocking::Client,
}
