//! Minimal `curl` or `wget` to be used for container health checks.
//!
//! ```text
//! cargo run --bin http_health_check http://127.0.0.1:8081/health_check
//! ```
//!
//! It exits with `0` when the endpoint answers a `2xx` status and with `1`
//! otherwise.
use std::process;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use reqwest::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The health check URL.
    url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 5)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    println!("Health check ...");

    match check(&args.url, Duration::from_secs(args.timeout)).await {
        Ok(status) => {
            println!("STATUS: {status}");
            process::exit(0);
        }
        Err(err) => {
            println!("ERROR: {err:#}");
            process::exit(1);
        }
    }
}

async fn check(url: &str, timeout: Duration) -> anyhow::Result<reqwest::StatusCode> {
    let url = Url::parse(url).context("failed to parse the health check URL")?;

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build the HTTP client")?;

    let response = client.get(url).send().await.context("the health check request failed")?;

    if !response.status().is_success() {
        bail!("non-success status received: {}", response.status());
    }

    Ok(response.status())
}
