use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cts_api_client::CtsClient;
use cts_api_client::auth::{Credentials, CredentialsProvider, StaticCredentials};
use cts_api_client::error::CtsError;
use cts_api_client::rest::CtsRestClient;

fn build_client(server: &MockServer) -> CtsRestClient {
    CtsRestClient::builder()
        .api_key("test_key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_sends_basic_authorization_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cts/veloparc"))
        // base64("test_key")
        .and(header("Authorization", "Basic dGVzdF9rZXk="))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Veloparc": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.veloparc().await.unwrap();
}

#[tokio::test]
async fn test_credentials_provider() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/velhop/velhop"))
        // base64("provided:")
        .and(header("Authorization", "Basic cHJvdmlkZWQ6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Velhop": [1]})))
        .mount(&server)
        .await;

    let client = CtsRestClient::builder()
        .credentials(Arc::new(StaticCredentials::new("provided:")))
        .base_url(server.uri())
        .build()
        .unwrap();
    assert_eq!(client.velhop().await.unwrap(), vec![serde_json::json!(1)]);
}

/// Hands out a usable key on the first lookup only, as a revoked key would.
struct RevokedCredentials {
    lookups: AtomicUsize,
    active: Credentials,
    revoked: Credentials,
}

impl RevokedCredentials {
    fn new(api_key: &str) -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            active: Credentials::new(api_key),
            revoked: Credentials::new(""),
        }
    }
}

impl CredentialsProvider for RevokedCredentials {
    fn get_credentials(&self) -> &Credentials {
        if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
            &self.active
        } else {
            &self.revoked
        }
    }
}

#[tokio::test]
async fn test_empty_key_at_call_time_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Veloparc": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = CtsRestClient::builder()
        .credentials(Arc::new(RevokedCredentials::new("test_key")))
        .base_url(server.uri())
        .build()
        .unwrap();

    let err = client.veloparc().await.unwrap_err();
    assert!(matches!(err, CtsError::CredentialMissing), "unexpected error: {err:?}");
    assert!(err.is_local());
}

#[tokio::test]
async fn test_non_200_status_is_connection_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/siri/2.0/lines-discovery"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"LinesDelivery": {"AnnotatedLineRef": ["A"]}})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.lines_discovery().await.unwrap_err();
    match err {
        CtsError::ConnectionFailure { status } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_other_success_status_is_connection_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cts/park-and-ride"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.park_and_ride().await.unwrap_err();
    assert!(err.is_connection_failure());
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cts/park-and-ride"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.park_and_ride().await.unwrap_err();
    match err {
        CtsError::InvalidResponse(message) => assert!(!message.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/siri/2.0/lines-discovery"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"LinesDelivery": {"AnnotatedLineRef": ["A"]}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = CtsRestClient::builder()
        .api_key("test_key")
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.lines_discovery().await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on the discard port.
    let client = CtsRestClient::builder()
        .api_key("test_key")
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.lines_discovery().await.unwrap_err();
    assert!(matches!(err, CtsError::Network(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cts/veloparc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Veloparc": [1, 2]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/cts/park-and-ride"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let (veloparcs, parks) = tokio::join!(client.veloparc(), client.park_and_ride());
    assert_eq!(veloparcs.unwrap().len(), 2);
    assert!(parks.unwrap_err().is_connection_failure());
}

async fn count_lines<C: CtsClient>(client: &C) -> Result<usize, CtsError> {
    Ok(client.lines_discovery().await?.len())
}

#[tokio::test]
async fn test_trait_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/siri/2.0/lines-discovery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"LinesDelivery": {"AnnotatedLineRef": ["A", "B", "C"]}}),
        ))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(count_lines(&client).await.unwrap(), 3);
}
