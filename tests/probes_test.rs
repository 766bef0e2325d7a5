//! Integration tests for the three probe checks

use owasp_checker::http::HttpClient;
use owasp_checker::scanner::{normalize_target, ProbeRunner};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn runner(target: &str) -> ProbeRunner {
    let client = HttpClient::new().expect("client");
    ProbeRunner::new(target, client)
}

// ============================================================================
// Target normalization
// ============================================================================

#[test]
fn normalize_adds_http_scheme() {
    assert_eq!(normalize_target("example.com"), "http://example.com");
    assert_eq!(
        normalize_target("example.com:8080"),
        "http://example.com:8080"
    );
}

#[test]
fn normalize_keeps_existing_scheme() {
    assert_eq!(normalize_target("http://example.com"), "http://example.com");
    assert_eq!(
        normalize_target("https://example.com"),
        "https://example.com"
    );
}

// ============================================================================
// Broken access control probe
// ============================================================================

#[tokio::test]
async fn access_control_finding_on_admin_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let finding = runner(&server.uri()).check_broken_access_control().await;
    assert_eq!(
        finding.expect("finding").label,
        "A01:2021 - Broken Access Control"
    );
}

#[tokio::test]
async fn access_control_no_finding_on_403() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let finding = runner(&server.uri()).check_broken_access_control().await;
    assert!(finding.is_none());
}

#[tokio::test]
async fn access_control_no_finding_on_404() {
    // No mock mounted: the stub answers 404 for every request
    let server = MockServer::start().await;

    let finding = runner(&server.uri()).check_broken_access_control().await;
    assert!(finding.is_none());
}

#[tokio::test]
async fn access_control_no_finding_on_connection_error() {
    let server = MockServer::start().await;
    let target = server.uri();
    drop(server);

    let finding = runner(&target).check_broken_access_control().await;
    assert!(finding.is_none());
}

// ============================================================================
// Injection probe
// ============================================================================

#[tokio::test]
async fn injection_finding_on_200_with_empty_body() {
    let server = MockServer::start().await;

    // Matching on the exact payload and content type pins the request shape
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string("username=admin' OR '1'='1&password=password"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let finding = runner(&server.uri()).check_injection().await;
    assert_eq!(finding.expect("finding").label, "A03:2021 - Injection");
}

#[tokio::test]
async fn injection_finding_on_404_with_welcome_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("Welcome back, admin! Your last login was yesterday."),
        )
        .mount(&server)
        .await;

    // The body marker alone is sufficient: status and marker are ORed
    let finding = runner(&server.uri()).check_injection().await;
    assert_eq!(finding.expect("finding").label, "A03:2021 - Injection");
}

#[tokio::test]
async fn injection_no_finding_on_404_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let finding = runner(&server.uri()).check_injection().await;
    assert!(finding.is_none());
}

#[tokio::test]
async fn injection_no_finding_on_connection_error() {
    let server = MockServer::start().await;
    let target = server.uri();
    drop(server);

    let finding = runner(&target).check_injection().await;
    assert!(finding.is_none());
}

// ============================================================================
// Security misconfiguration probe
// ============================================================================

#[tokio::test]
async fn misconfig_finding_on_phpinfo_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phpinfo.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>phpinfo()</title>"))
        .mount(&server)
        .await;

    let finding = runner(&server.uri())
        .check_security_misconfiguration()
        .await;
    assert_eq!(
        finding.expect("finding").label,
        "A05:2021 - Security Misconfiguration"
    );
}

#[tokio::test]
async fn misconfig_no_finding_on_404() {
    let server = MockServer::start().await;

    let finding = runner(&server.uri())
        .check_security_misconfiguration()
        .await;
    assert!(finding.is_none());
}

#[tokio::test]
async fn misconfig_no_finding_on_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phpinfo.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let finding = runner(&server.uri())
        .check_security_misconfiguration()
        .await;
    assert!(finding.is_none());
}

// ============================================================================
// run_all
// ============================================================================

#[tokio::test]
async fn run_all_collects_findings_in_fixed_order() {
    let server = MockServer::start().await;

    // Every path answers 200, so all three probes match
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let findings = runner(&server.uri()).run_all().await;
    let labels: Vec<&str> = findings.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "A01:2021 - Broken Access Control",
            "A03:2021 - Injection",
            "A05:2021 - Security Misconfiguration",
        ]
    );
}

#[tokio::test]
async fn run_all_empty_on_unreachable_target() {
    let server = MockServer::start().await;
    let target = server.uri();
    drop(server);

    let findings = runner(&target).run_all().await;
    assert!(findings.is_empty());
}

#[tokio::test]
async fn run_all_issues_one_request_per_probe() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpClient::new().expect("client");
    let counter = client.clone();
    let runner = ProbeRunner::new(&server.uri(), client);

    let findings = runner.run_all().await;
    assert!(findings.is_empty());
    assert_eq!(counter.request_count(), 3);
}
