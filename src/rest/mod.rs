//! CTS REST API client.
//!
//! Provides access to the SIRI and facility endpoints of the CTS open data API.
//!
//! # Trait-based API
//!
//! The [`CtsClient`] trait abstracts all REST API operations, enabling
//! mock implementations for testing and decorators in applications.
//!
//! ```rust,ignore
//! use cts_api_client::rest::{CtsClient, CtsRestClient};
//!
//! async fn use_client<C: CtsClient>(client: &C) -> Result<(), cts_api_client::CtsError> {
//!     let lines = client.lines_discovery().await?;
//!     println!("{} lines", lines.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod extract;
pub mod facilities;
pub mod params;
pub mod siri;
mod traits;

pub use client::{CtsRestClient, CtsRestClientBuilder};
pub use endpoints::{CTS_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use traits::CtsClient;
