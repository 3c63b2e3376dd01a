//! Authentication module for the CTS API.
//!
//! This module provides:
//! - Credential management with secure key storage
//! - HTTP Basic authorization header construction

mod basic;
mod credentials;

pub use basic::basic_authorization;
pub use credentials::{
    Credentials, CredentialsProvider, DEFAULT_API_KEY_VAR, EnvCredentials, StaticCredentials,
};
