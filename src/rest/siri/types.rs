//! Request types for SIRI endpoints.

use crate::rest::params::{ParameterSet, QueryParams};

/// Request parameters for the estimated timetable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatedTimetableRequest {
    /// Vehicle mode filter (e.g. "bus", "tram").
    pub vehicle_mode: Option<String>,
    /// Line filter.
    pub line_ref: Option<String>,
    /// Direction filter.
    pub direction_ref: Option<u32>,
}

impl EstimatedTimetableRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by vehicle mode.
    pub fn vehicle_mode(mut self, vehicle_mode: impl Into<String>) -> Self {
        self.vehicle_mode = Some(vehicle_mode.into());
        self
    }

    /// Filter by line.
    pub fn line_ref(mut self, line_ref: impl Into<String>) -> Self {
        self.line_ref = Some(line_ref.into());
        self
    }

    /// Filter by direction.
    pub fn direction_ref(mut self, direction_ref: u32) -> Self {
        self.direction_ref = Some(direction_ref);
        self
    }
}

impl QueryParams for EstimatedTimetableRequest {
    fn query_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .push_opt("VehicleMode", self.vehicle_mode.clone())
            .push_opt("LineRef", self.line_ref.clone())
            .push_opt("DirectionRef", self.direction_ref);
        params
    }
}

/// Request parameters for stop monitoring.
///
/// `monitoring_ref` (the stop code, e.g. "233A") is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopMonitoringRequest {
    /// Stop code to monitor.
    pub monitoring_ref: String,
    /// Vehicle mode filter.
    pub vehicle_mode: Option<String>,
    /// Look-ahead window as an ISO 8601 duration (e.g. "PT30M").
    pub preview_interval: Option<String>,
    /// Start of the window as an ISO 8601 date-time.
    pub start_time: Option<String>,
    /// Line filter.
    pub line_ref: Option<String>,
    /// Direction filter.
    pub direction_ref: Option<u32>,
    /// Maximum number of visits returned.
    pub maximum_stop_visits: Option<u32>,
    /// Minimum number of visits returned per line.
    pub minimum_stop_visits_per_line: Option<u32>,
}

impl StopMonitoringRequest {
    /// Create a request for a stop.
    pub fn new(monitoring_ref: impl Into<String>) -> Self {
        Self {
            monitoring_ref: monitoring_ref.into(),
            ..Default::default()
        }
    }

    /// Filter by vehicle mode.
    pub fn vehicle_mode(mut self, vehicle_mode: impl Into<String>) -> Self {
        self.vehicle_mode = Some(vehicle_mode.into());
        self
    }

    /// Set the look-ahead window.
    pub fn preview_interval(mut self, preview_interval: impl Into<String>) -> Self {
        self.preview_interval = Some(preview_interval.into());
        self
    }

    /// Set the start of the window.
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Filter by line.
    pub fn line_ref(mut self, line_ref: impl Into<String>) -> Self {
        self.line_ref = Some(line_ref.into());
        self
    }

    /// Filter by direction.
    pub fn direction_ref(mut self, direction_ref: u32) -> Self {
        self.direction_ref = Some(direction_ref);
        self
    }

    /// Limit the number of visits.
    pub fn maximum_stop_visits(mut self, count: u32) -> Self {
        self.maximum_stop_visits = Some(count);
        self
    }

    /// Require a minimum number of visits per line.
    pub fn minimum_stop_visits_per_line(mut self, count: u32) -> Self {
        self.minimum_stop_visits_per_line = Some(count);
        self
    }
}

impl QueryParams for StopMonitoringRequest {
    fn query_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .push("MonitoringRef", self.monitoring_ref.as_str())
            .push_opt("VehicleMode", self.vehicle_mode.clone())
            .push_opt("PreviewInterval", self.preview_interval.clone())
            .push_opt("StartTime", self.start_time.clone())
            .push_opt("LineRef", self.line_ref.clone())
            .push_opt("DirectionRef", self.direction_ref)
            .push_opt("MaximumStopVisits", self.maximum_stop_visits)
            .push_opt("MinimumStopVisitsPerLine", self.minimum_stop_visits_per_line);
        params
    }
}

/// Request parameters for stop points discovery.
///
/// Coordinates are WGS84 degrees; `distance` is in meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopPointsDiscoveryRequest {
    /// Latitude of the search center.
    pub latitude: Option<f64>,
    /// Longitude of the search center.
    pub longitude: Option<f64>,
    /// Search radius.
    pub distance: Option<f64>,
}

impl StopPointsDiscoveryRequest {
    /// Create a request for stop points around a location.
    pub fn near(latitude: f64, longitude: f64, distance: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            distance: Some(distance),
        }
    }
}

impl QueryParams for StopPointsDiscoveryRequest {
    fn query_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .push_opt("latitude", self.latitude)
            .push_opt("longitude", self.longitude)
            .push_opt("distance", self.distance);
        params
    }
}
