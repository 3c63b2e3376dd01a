//! CTS REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{CredentialsProvider, StaticCredentials, basic_authorization};
use crate::error::CtsError;
use crate::rest::endpoints::{CTS_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::rest::facilities::RetailOutletRequest;
use crate::rest::params::ParameterSet;
use crate::rest::siri::{
    EstimatedTimetableRequest, StopMonitoringRequest, StopPointsDiscoveryRequest,
};
use crate::rest::traits::CtsClient;

/// Maximum number of redirects followed for a single request.
const MAX_REDIRECTS: usize = 10;

/// The CTS REST API client.
///
/// This client provides access to the SIRI and facility endpoints of the CTS
/// open data API. It handles authentication and the request timeout; it never
/// retries a failed request.
///
/// Cloning is cheap and clones share the underlying connection pool. Calls on
/// one client are independent of each other and may run concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use cts_api_client::rest::CtsRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CtsRestClient::new("my_api_key")?;
///
///     let lines = client.lines_discovery().await?;
///     println!("Lines: {:?}", lines);
///
///     Ok(())
/// }
/// ```
///
/// With a custom timeout:
///
/// ```rust,no_run
/// use cts_api_client::rest::CtsRestClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CtsRestClient::builder()
///     .api_key("my_api_key")
///     .timeout(Duration::from_secs(3))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CtsRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    timeout: Duration,
}

impl CtsRestClient {
    /// Create a new client for the given API key with default settings.
    ///
    /// Fails with [`CtsError::Configuration`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CtsError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CtsRestClientBuilder {
        CtsRestClientBuilder::new()
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request without query parameters.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Value, CtsError> {
        self.get_with_params(endpoint, &ParameterSet::new()).await
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// Exactly one network call is made, unless the request is rejected
    /// locally (missing key, empty endpoint). The whole exchange, body
    /// included, races against the configured timeout.
    pub(crate) async fn get_with_params(
        &self,
        endpoint: &str,
        params: &ParameterSet,
    ) -> Result<Value, CtsError> {
        let authorization = basic_authorization(self.credentials.get_credentials())?;

        if endpoint.is_empty() {
            return Err(CtsError::RequestMissing);
        }

        let query_string = params.to_query_string();
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };

        tracing::debug!(endpoint, params = params.len(), "Sending CTS API request");

        let request = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json");

        // Dropping the exchange future abandons the request.
        let exchange = Self::exchange(endpoint, request);
        let body = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(body) => body?,
            Err(_) => {
                tracing::warn!(
                    endpoint,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "CTS API request timed out"
                );
                return Err(CtsError::Timeout);
            }
        };

        serde_json::from_str(&body).map_err(|e| CtsError::InvalidResponse(e.to_string()))
    }

    /// Send the request and read the body of a 200 response.
    ///
    /// Any other status is a connection failure; its body is not read.
    async fn exchange(
        endpoint: &str,
        request: reqwest_middleware::RequestBuilder,
    ) -> Result<String, CtsError> {
        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(endpoint, status = status.as_u16(), "CTS API connection failed");
            return Err(CtsError::ConnectionFailure {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| CtsError::Network(e.into()))
    }
}

impl std::fmt::Debug for CtsRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtsRestClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`CtsRestClient`].
pub struct CtsRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl CtsRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: CTS_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(self, api_key: impl Into<String>) -> Self {
        self.credentials(Arc::new(StaticCredentials::new(api_key)))
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout.
    ///
    /// A zero duration falls back to the default of 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            Duration::from_millis(DEFAULT_TIMEOUT_MS)
        } else {
            timeout
        };
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn timeout_millis(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`CtsError::Configuration`] if no non-empty API key was
    /// provided, and with [`CtsError::Url`] if the base URL does not parse.
    pub fn build(self) -> Result<CtsRestClient, CtsError> {
        let credentials = self
            .credentials
            .ok_or_else(|| CtsError::Configuration("API key missing".to_string()))?;
        if credentials.get_credentials().is_empty() {
            return Err(CtsError::Configuration("API key is empty".to_string()));
        }

        url::Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cts-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("cts-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(CtsRestClient {
            http_client: client,
            base_url,
            credentials,
            timeout: self.timeout,
        })
    }
}

impl Default for CtsRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// CtsClient trait implementation.

impl CtsClient for CtsRestClient {
    // ========== SIRI Endpoints ==========

    async fn estimated_timetable(
        &self,
        request: Option<&EstimatedTimetableRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::estimated_timetable(self, request).await
    }

    async fn lines_discovery(&self) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::lines_discovery(self).await
    }

    async fn stop_monitoring(
        &self,
        request: &StopMonitoringRequest,
    ) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::stop_monitoring(self, request).await
    }

    async fn stop_points_discovery(
        &self,
        request: Option<&StopPointsDiscoveryRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::stop_points_discovery(self, request).await
    }

    // ========== Facility Endpoints ==========

    async fn park_and_ride(&self) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::park_and_ride(self).await
    }

    async fn retail_outlet(
        &self,
        request: Option<&RetailOutletRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::retail_outlet(self, request).await
    }

    async fn retail_outlet_types(&self) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::retail_outlet_types(self).await
    }

    async fn veloparc(&self) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::veloparc(self).await
    }

    async fn velhop(&self) -> Result<Vec<Value>, CtsError> {
        CtsRestClient::velhop(self).await
    }
}
