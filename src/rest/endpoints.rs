//! CTS REST API endpoint constants.

/// Base URL for the CTS REST API.
pub const CTS_BASE_URL: &str = "https://api.cts-strasbourg.eu";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// SIRI 2.0 endpoints.
pub mod siri {
    /// Estimated timetable of running and upcoming vehicle journeys.
    pub const ESTIMATED_TIMETABLE: &str = "/v1/siri/2.0/estimated-timetable";
    /// Lines discovery.
    pub const LINES_DISCOVERY: &str = "/v1/siri/2.0/lines-discovery";
    /// Real-time stop monitoring.
    pub const STOP_MONITORING: &str = "/v1/siri/2.0/stop-monitoring";
    /// Stop points discovery.
    pub const STOP_POINTS_DISCOVERY: &str = "/v1/siri/2.0/stoppoints-discovery";
}

/// CTS facility endpoints.
pub mod facilities {
    /// Park and ride with available spots.
    pub const PARK_AND_RIDE: &str = "/v1/cts/park-and-ride";
    /// Retail outlets.
    pub const RETAIL_OUTLET: &str = "/v1/cts/retail-outlet";
    /// Retail outlet types.
    pub const RETAIL_OUTLET_TYPES: &str = "/v1/cts/retail-outlet/types";
    /// Veloparcs.
    pub const VELOPARC: &str = "/v1/cts/veloparc";
    /// Vélhop automatic stations and stores.
    pub const VELHOP: &str = "/v1/velhop/velhop";
}
