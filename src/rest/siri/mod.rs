//! SIRI 2.0 endpoints.
//!
//! The CTS implements a subset of the SIRI standard. Response documents are
//! returned untyped: each method unwraps the delivery that holds its result
//! set and hands back the entries as JSON values.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CtsError;
use crate::rest::CtsRestClient;
use crate::rest::endpoints::siri;
use crate::rest::extract::{flatten_stop_visits, take_sequence};
use crate::rest::params::QueryParams;

impl CtsRestClient {
    /// Get the estimated timetable.
    ///
    /// Returns the current status of all known vehicle journeys: those
    /// running now and those starting within the hour.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cts_api_client::rest::CtsRestClient;
    /// use cts_api_client::rest::siri::EstimatedTimetableRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CtsRestClient::new("my_api_key")?;
    ///     let request = EstimatedTimetableRequest::new().line_ref("A");
    ///     let deliveries = client.estimated_timetable(Some(&request)).await?;
    ///     println!("{} deliveries", deliveries.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn estimated_timetable(
        &self,
        request: Option<&EstimatedTimetableRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        let response = match request {
            Some(req) => {
                self.get_with_params(siri::ESTIMATED_TIMETABLE, &req.query_params())
                    .await?
            }
            None => self.get(siri::ESTIMATED_TIMETABLE).await?,
        };
        Ok(take_sequence(
            response,
            &["ServiceDelivery", "EstimatedTimetableDelivery"],
        ))
    }

    /// Get the lines of the network.
    pub async fn lines_discovery(&self) -> Result<Vec<Value>, CtsError> {
        let response = self.get(siri::LINES_DISCOVERY).await?;
        Ok(take_sequence(response, &["LinesDelivery", "AnnotatedLineRef"]))
    }

    /// Get the vehicle journeys expected at a stop.
    ///
    /// Visits from every stop monitoring delivery are flattened into one list
    /// of `MonitoredVehicleJourney` entries, in response order.
    ///
    /// Fails with [`CtsError::SettingsMissing`] without any network call if
    /// `monitoring_ref` is empty.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cts_api_client::rest::CtsRestClient;
    /// use cts_api_client::rest::siri::StopMonitoringRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CtsRestClient::new("my_api_key")?;
    ///     let request = StopMonitoringRequest::new("233A").maximum_stop_visits(5);
    ///     for journey in client.stop_monitoring(&request).await? {
    ///         println!("{}", journey["PublishedLineName"]);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn stop_monitoring(
        &self,
        request: &StopMonitoringRequest,
    ) -> Result<Vec<Value>, CtsError> {
        if request.monitoring_ref.is_empty() {
            return Err(CtsError::SettingsMissing("monitoring_ref"));
        }

        let response = self
            .get_with_params(siri::STOP_MONITORING, &request.query_params())
            .await?;
        Ok(flatten_stop_visits(response))
    }

    /// Get the stop points of the network, optionally around a location.
    pub async fn stop_points_discovery(
        &self,
        request: Option<&StopPointsDiscoveryRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        let response = match request {
            Some(req) => {
                self.get_with_params(siri::STOP_POINTS_DISCOVERY, &req.query_params())
                    .await?
            }
            None => self.get(siri::STOP_POINTS_DISCOVERY).await?,
        };
        Ok(take_sequence(
            response,
            &["StopPointsDelivery", "AnnotatedStopPointRef"],
        ))
    }
}
