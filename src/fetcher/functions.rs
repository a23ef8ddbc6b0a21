//! The impls and functions.
//!
use std::time::Instant;
use log::*;
use serde_json::Value;
use crate::config::ApiConfig;
use crate::error::CollectError;
use crate::fetcher::{Fetch, HttpFetcher};

impl HttpFetcher {
    pub fn new(api: ApiConfig) -> Result<Self, CollectError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|source| CollectError::Network { url: api.base_url(), source })?;
        Ok(HttpFetcher { api, client })
    }
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url(), path)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<Value, CollectError> {
        let url = self.url(path);
        let timer = Instant::now();

        let response = self.client
            .get(&url)
            .basic_auth(&self.api.username, Some(&self.api.password))
            .send()
            .map_err(|source| CollectError::Network { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Non success response: {} = {}", url, status);
            return Err(CollectError::HttpStatus { url, status });
        }
        debug!("Success response: {} = {}, {:?}", url, status, timer.elapsed());

        // bytes, not text(): text() replaces invalid UTF-8 instead of failing.
        let body = response.bytes()
            .map_err(|source| CollectError::Network { url: url.clone(), source })?;
        parse_document(&url, &body)
    }
}

// This is a separate function in order to allow tests to use it without a server.
fn parse_document(url: &str, body: &[u8]) -> Result<Value, CollectError> {
    serde_json::from_slice(body)
        .map_err(|source| CollectError::Decode { url: url.to_string(), source })
}
