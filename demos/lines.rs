//! Example: List the lines of the network.
//!
//! Run with: CTS_API_KEY=... cargo run --example lines

use std::sync::Arc;

use cts_api_client::auth::EnvCredentials;
use cts_api_client::rest::CtsRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::try_from_env().ok_or("CTS_API_KEY is not set")?;
    let client = CtsRestClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    let lines = client.lines_discovery().await?;
    for line in &lines {
        println!("{line}");
    }

    let stops = client.stop_points_discovery(None).await?;
    println!("{} lines, {} stop points", lines.len(), stops.len());

    Ok(())
}
