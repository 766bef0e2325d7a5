//! Plaintext report rendering and file output

use crate::error::Result;
use crate::models::Finding;
use std::io::Write as _;
use std::path::Path;
use tracing::debug;

/// Decorative report header
pub const BANNER: &str = r#"    ╔═══════════════════════════════════════╗
    ║   OWASP CHECKER                       ║
    ║   Top 10 probe runner                 ║
    ╚═══════════════════════════════════════╝"#;

/// Renders the report text: banner, target, and one line per finding
pub fn render(target: &str, findings: &[Finding]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push_str("\n\n");
    out.push_str(&format!("Target: {target}\nResults:\n"));

    if findings.is_empty() {
        out.push_str("  No vulnerabilities found.\n");
    } else {
        for finding in findings {
            out.push_str(&format!(
                "  - Vulnerability Found: {} - Risk Level: {}\n",
                finding.label,
                finding.risk()
            ));
        }
    }

    out
}

/// Writes the rendered report to `path`, overwriting any existing file.
///
/// The file is created owner-writable and world-readable (mode 0644).
pub fn write(path: &Path, text: &str) -> Result<()> {
    let mut file = open_for_write(path)?;
    file.write_all(text.as_bytes())?;
    debug!("Report saved to {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
