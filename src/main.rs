//! OWASP checker CLI

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use owasp_checker::http::HttpClient;
use owasp_checker::report;
use owasp_checker::scanner::ProbeRunner;

const USAGE: &str = "Usage: owasp_checker -t <target_url> -o <output_file>";

/// OWASP Top 10 checker: probes a target URL and writes a plaintext report
#[derive(Parser)]
#[command(name = "owasp_checker", version, about)]
struct Cli {
    /// Target URL to test
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// Output file to save the results
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("owasp_checker=info")),
        )
        .with_target(false)
        .init();

    // Missing flags are a normal exit, not an error
    let (target, output) = match (cli.target, cli.output) {
        (Some(t), Some(o)) if !t.is_empty() && !o.is_empty() => (t, o),
        _ => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let client = HttpClient::new()?;
    let runner = ProbeRunner::new(&target, client);
    let findings = runner.run_all().await;

    let text = report::render(runner.target(), &findings);

    // Write failure short-circuits: the report is echoed to the terminal
    // only once it has been saved
    if let Err(e) = report::write(Path::new(&output), &text) {
        println!("Error writing to file: {e}");
        return Ok(());
    }

    println!("{text}");
    println!("Scan completed. Results saved to {output}");

    Ok(())
}
