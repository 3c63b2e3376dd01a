//! Trait definition for the CTS REST API client.
//!
//! This module provides the `CtsClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator patterns (e.g., caching wrapper in an application)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use cts_api_client::rest::{CtsClient, CtsRestClient};
//!
//! async fn count_lines<C: CtsClient>(client: &C) -> Result<usize, cts_api_client::CtsError> {
//!     Ok(client.lines_discovery().await?.len())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::CtsError;
use crate::rest::facilities::RetailOutletRequest;
use crate::rest::siri::{
    EstimatedTimetableRequest, StopMonitoringRequest, StopPointsDiscoveryRequest,
};

/// Trait defining all CTS REST API operations.
///
/// All methods are async and return `Result<Vec<Value>, CtsError>`: the
/// result set of the endpoint, empty when the response carries none.
pub trait CtsClient: Send + Sync {
    // ========== SIRI Endpoints ==========

    /// Get the estimated timetable.
    fn estimated_timetable(
        &self,
        request: Option<&EstimatedTimetableRequest>,
    ) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get the lines of the network.
    fn lines_discovery(&self) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get the vehicle journeys expected at a stop.
    fn stop_monitoring(
        &self,
        request: &StopMonitoringRequest,
    ) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get the stop points of the network.
    fn stop_points_discovery(
        &self,
        request: Option<&StopPointsDiscoveryRequest>,
    ) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    // ========== Facility Endpoints ==========

    /// Get park and ride facilities.
    fn park_and_ride(&self) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get retail outlets.
    fn retail_outlet(
        &self,
        request: Option<&RetailOutletRequest>,
    ) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get retail outlet types.
    fn retail_outlet_types(&self) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get veloparcs.
    fn veloparc(&self) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;

    /// Get Vélhop stations and stores.
    fn velhop(&self) -> impl Future<Output = Result<Vec<Value>, CtsError>> + Send;
}
