//! Probe runner: a fixed set of OWASP Top 10 checks against one target

pub mod access;
pub mod injection;
pub mod misconfig;

use crate::http::HttpClient;
use crate::models::Finding;
use tracing::debug;

/// Prepends `http://` when the target lacks a scheme.
///
/// Targets already bearing `http://` or `https://` pass through
/// unchanged. No further parsing or validation happens here; an
/// unparsable target simply makes every probe miss.
pub fn normalize_target(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

/// Runs the fixed probe set against a single target URL.
///
/// Probes are independent and stateless beyond the target: a failed
/// request is a "no finding" for that probe, never a fatal error.
pub struct ProbeRunner {
    target: String,
    client: HttpClient,
}

impl ProbeRunner {
    /// Creates a runner for the given target, normalizing its scheme
    pub fn new(raw_target: &str, client: HttpClient) -> Self {
        Self {
            target: normalize_target(raw_target),
            client,
        }
    }

    /// The normalized target URL
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Probes for unauthenticated access to `/admin`
    pub async fn check_broken_access_control(&self) -> Option<Finding> {
        access::check(&self.client, &self.target).await
    }

    /// Probes the login form with a SQL injection payload
    pub async fn check_injection(&self) -> Option<Finding> {
        injection::check(&self.client, &self.target).await
    }

    /// Probes for an exposed `/phpinfo.php`
    pub async fn check_security_misconfiguration(&self) -> Option<Finding> {
        misconfig::check(&self.client, &self.target).await
    }

    /// Runs all probes sequentially and collects the findings.
    ///
    /// Order is part of the report contract: access control, injection,
    /// misconfiguration.
    pub async fn run_all(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        for result in [
            self.check_broken_access_control().await,
            self.check_injection().await,
            self.check_security_misconfiguration().await,
        ] {
            if let Some(finding) = result {
                debug!("Found: {}", finding.label);
                findings.push(finding);
            }
        }

        debug!(
            "Scan finished: {} findings, {} requests",
            findings.len(),
            self.client.request_count()
        );

        findings
    }
}
