//! Example: Working with CtsError.
//!
//! Run with: cargo run --example error_handling

use cts_api_client::CtsError;
use cts_api_client::rest::CtsRestClient;
use cts_api_client::rest::siri::StopMonitoringRequest;

#[tokio::main]
async fn main() {
    match CtsRestClient::new("") {
        Err(CtsError::Configuration(reason)) => println!("Rejected at construction: {reason}"),
        Err(other) => println!("Unexpected error: {other}"),
        Ok(_) => println!("Unexpectedly built a client without a key"),
    }

    let client = match CtsRestClient::new("my_api_key") {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let err = client
        .stop_monitoring(&StopMonitoringRequest::new(""))
        .await
        .unwrap_err();
    println!("Local error: {err} (no request sent: {})", err.is_local());

    match client.lines_discovery().await {
        Ok(lines) => println!("{} lines", lines.len()),
        Err(e) if e.is_timeout() => println!("Timed out, try again later"),
        Err(e) if e.is_connection_failure() => println!("API refused the request: {e}"),
        Err(e) => println!("Other error: {e}"),
    }
}
