//! OWASP Top 10 probe runner
//!
//! Issues a small fixed set of HTTP probes against a target URL, flags
//! responses matching naive signatures of three OWASP Top 10 categories,
//! and writes a plaintext report.

pub mod error;
pub mod http;
pub mod models;
pub mod report;
pub mod risk;
pub mod scanner;
