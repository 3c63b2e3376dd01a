//! Example: Next departures at a stop.
//!
//! Run with: CTS_API_KEY=... cargo run --example stop_monitoring -- 233A

use std::sync::Arc;
use std::time::Duration;

use cts_api_client::auth::EnvCredentials;
use cts_api_client::rest::CtsRestClient;
use cts_api_client::rest::siri::StopMonitoringRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stop = std::env::args().nth(1).unwrap_or_else(|| "233A".to_string());

    let credentials = EnvCredentials::try_from_env().ok_or("CTS_API_KEY is not set")?;
    let client = CtsRestClient::builder()
        .credentials(Arc::new(credentials))
        .timeout(Duration::from_secs(5))
        .build()?;

    let request = StopMonitoringRequest::new(stop.as_str())
        .preview_interval("PT30M")
        .maximum_stop_visits(10);

    for journey in client.stop_monitoring(&request).await? {
        println!(
            "{} -> {} at {}",
            journey["PublishedLineName"],
            journey["DestinationName"],
            journey["MonitoredCall"]["ExpectedDepartureTime"]
        );
    }

    Ok(())
}
