//! Request types for CTS facility endpoints.

use crate::rest::params::{ParameterSet, QueryParams};

/// Request parameters for retail outlets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetailOutletRequest {
    /// Only outlets selling tickets.
    pub ticket_sales: Option<bool>,
    /// Only outlets able to top up a Badgéo card.
    pub badgeo_top_up: Option<bool>,
    /// Comma-separated outlet type filter.
    pub types: Option<String>,
    /// Latitude of the search center.
    pub latitude: Option<f64>,
    /// Longitude of the search center.
    pub longitude: Option<f64>,
    /// Search radius in meters.
    pub distance: Option<f64>,
}

impl RetailOutletRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only outlets selling tickets.
    pub fn ticket_sales(mut self, ticket_sales: bool) -> Self {
        self.ticket_sales = Some(ticket_sales);
        self
    }

    /// Only outlets able to top up a Badgéo card.
    pub fn badgeo_top_up(mut self, badgeo_top_up: bool) -> Self {
        self.badgeo_top_up = Some(badgeo_top_up);
        self
    }

    /// Filter by outlet types.
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Restrict to outlets around a location.
    pub fn near(mut self, latitude: f64, longitude: f64, distance: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.distance = Some(distance);
        self
    }
}

impl QueryParams for RetailOutletRequest {
    fn query_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .push_opt("TicketSales", self.ticket_sales)
            .push_opt("BadgeoTopUp", self.badgeo_top_up)
            .push_opt("types", self.types.clone())
            .push_opt("latitude", self.latitude)
            .push_opt("longitude", self.longitude)
            .push_opt("distance", self.distance);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retail_outlet_params() {
        let request = RetailOutletRequest::new()
            .ticket_sales(true)
            .types("1,2")
            .near(48.58, 7.75, 1000.0);
        assert_eq!(
            request.query_params().to_query_string(),
            "TicketSales=true&types=1%2C2&latitude=48.58&longitude=7.75&distance=1000"
        );
    }

    #[test]
    fn test_false_flags_are_not_forwarded() {
        let request = RetailOutletRequest::new()
            .ticket_sales(false)
            .badgeo_top_up(true);
        assert_eq!(
            request.query_params().to_query_string(),
            "BadgeoTopUp=true"
        );
    }
}
