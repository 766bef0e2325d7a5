//! Broken access control probe
//!
//! Requests `/admin` without credentials. A plain 200 is taken as
//! evidence of missing access control, login pages included.

use crate::http::HttpClient;
use crate::models::Finding;
use reqwest::StatusCode;
use tracing::debug;

const LABEL: &str = "A01:2021 - Broken Access Control";

/// Issues an unauthenticated GET to `<target>/admin`
pub async fn check(client: &HttpClient, target: &str) -> Option<Finding> {
    let url = format!("{target}/admin");

    match client.get(&url).await {
        Ok(response) if response.status() == StatusCode::OK => Some(Finding::new(LABEL)),
        Ok(response) => {
            debug!("Access control probe: {} on {url}", response.status());
            None
        }
        Err(e) => {
            debug!("Access control probe failed for {url}: {e}");
            None
        }
    }
}
