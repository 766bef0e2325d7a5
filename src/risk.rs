//! Static category-to-risk mapping for the OWASP Top 10 (2021)

use crate::models::Severity;

/// Risk ratings for all ten canonical categories, probed or not
const RISK_RATINGS: &[(&str, Severity)] = &[
    ("A01:2021 - Broken Access Control", Severity::High),
    ("A02:2021 - Cryptographic Failures", Severity::High),
    ("A03:2021 - Injection", Severity::High),
    ("A04:2021 - Insecure Design", Severity::Medium),
    ("A05:2021 - Security Misconfiguration", Severity::Medium),
    ("A06:2021 - Vulnerable and Outdated Components", Severity::Medium),
    (
        "A07:2021 - Identification and Authentication Failures",
        Severity::High,
    ),
    (
        "A08:2021 - Software and Data Integrity Failures",
        Severity::High,
    ),
    (
        "A09:2021 - Security Logging and Monitoring Failures",
        Severity::Low,
    ),
    (
        "A10:2021 - Server-Side Request Forgery (SSRF)",
        Severity::High,
    ),
];

/// Returns the risk rating for a category label.
///
/// Lookup is exact-match; labels not in the table rate as `Unknown`.
pub fn risk_rating(label: &str) -> Severity {
    RISK_RATINGS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Unknown)
}
