//! HTTP client wrapper with request tracking

use crate::error::Result;
use reqwest::{Client, Response};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("owasp-checker/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a shared `reqwest::Client` with request counting.
///
/// Every probe issues exactly one request: no retries, no rate limiting,
/// and no timeout beyond the library defaults.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_count: Arc<AtomicU64>,
}

impl HttpClient {
    /// Creates a new client with default transport settings
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Sends a single GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let response = self.client.get(url).send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }

    /// Sends a single POST request with a form-encoded body
    pub async fn post_form(&self, url: &str, body: &str) -> Result<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }

    /// Returns the total number of requests made
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
