//! Security misconfiguration probe
//!
//! Checks whether `/phpinfo.php` is reachable on the target.

use crate::http::HttpClient;
use crate::models::Finding;
use reqwest::StatusCode;
use tracing::debug;

const LABEL: &str = "A05:2021 - Security Misconfiguration";

/// Issues a GET to `<target>/phpinfo.php`
pub async fn check(client: &HttpClient, target: &str) -> Option<Finding> {
    let url = format!("{target}/phpinfo.php");

    match client.get(&url).await {
        Ok(response) if response.status() == StatusCode::OK => Some(Finding::new(LABEL)),
        Ok(response) => {
            debug!("Misconfiguration probe: {} on {url}", response.status());
            None
        }
        Err(e) => {
            debug!("Misconfiguration probe failed for {url}: {e}");
            None
        }
    }
}
