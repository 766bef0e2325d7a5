//! Core data models for the OWASP checker

use crate::risk;
use std::fmt;

/// Severity level for a finding, printed verbatim in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
            Severity::Unknown => write!(f, "unknown"),
        }
    }
}

/// A vulnerability category detected by a probe.
///
/// Findings carry no identity beyond the category label and are never
/// deduplicated; their order is the probe execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// OWASP Top 10 category label
    pub label: String,
}

impl Finding {
    /// Creates a new finding for the given category label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Looks up the static risk rating for this finding's category
    pub fn risk(&self) -> Severity {
        risk::risk_rating(&self.label)
    }
}
