//! # CTS Client
//!
//! An async Rust client library for the CTS (Compagnie des Transports Strasbourgeois)
//! real-time open data API.
//!
//! ## Features
//!
//! - SIRI 2.0 endpoints: estimated timetable, lines discovery, stop monitoring
//!   and stop points discovery
//! - CTS facility endpoints: park and ride, retail outlets, veloparcs, Vélhop
//! - HTTP Basic authentication from a single API key
//! - Per-request timeout with no hidden retries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cts_api_client::rest::CtsRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CtsRestClient::new("my_api_key")?;
//!     let lines = client.lines_discovery().await?;
//!     println!("{} lines", lines.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::CtsError;
pub use rest::{CtsClient, CtsRestClient};

/// Result type alias using CtsError
pub type Result<T> = std::result::Result<T, CtsError>;
