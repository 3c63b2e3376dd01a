//! CTS facility endpoints: park and ride, retail outlets, bike parking and
//! Vélhop bike rental.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CtsError;
use crate::rest::CtsRestClient;
use crate::rest::endpoints::facilities;
use crate::rest::extract::take_sequence;
use crate::rest::params::QueryParams;

impl CtsRestClient {
    /// Get park and ride facilities with their available spots.
    pub async fn park_and_ride(&self) -> Result<Vec<Value>, CtsError> {
        let response = self.get(facilities::PARK_AND_RIDE).await?;
        Ok(take_sequence(response, &["ParkAndRide"]))
    }

    /// Get retail outlets.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional filters on services offered and location.
    pub async fn retail_outlet(
        &self,
        request: Option<&RetailOutletRequest>,
    ) -> Result<Vec<Value>, CtsError> {
        let response = match request {
            Some(req) => {
                self.get_with_params(facilities::RETAIL_OUTLET, &req.query_params())
                    .await?
            }
            None => self.get(facilities::RETAIL_OUTLET).await?,
        };
        Ok(take_sequence(response, &["RetailOutlet"]))
    }

    /// Get retail outlet types.
    pub async fn retail_outlet_types(&self) -> Result<Vec<Value>, CtsError> {
        let response = self.get(facilities::RETAIL_OUTLET_TYPES).await?;
        Ok(take_sequence(response, &["RetailOutletType"]))
    }

    /// Get veloparcs.
    pub async fn veloparc(&self) -> Result<Vec<Value>, CtsError> {
        let response = self.get(facilities::VELOPARC).await?;
        Ok(take_sequence(response, &["Veloparc"]))
    }

    /// Get Vélhop automatic stations and stores.
    pub async fn velhop(&self) -> Result<Vec<Value>, CtsError> {
        let response = self.get(facilities::VELHOP).await?;
        Ok(take_sequence(response, &["Velhop"]))
    }
}
