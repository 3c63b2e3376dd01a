//! HTTP Basic authorization for the CTS API.
//!
//! The CTS API authenticates with the API key as the Basic username:
//! ```text
//! Authorization: Basic base64(utf8(api_key))
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::auth::Credentials;
use crate::error::CtsError;

/// Build the `Authorization` header value for the given credentials.
///
/// Fails with [`CtsError::CredentialMissing`] if the key is empty.
///
/// # Example
///
/// ```rust
/// use cts_api_client::auth::{Credentials, basic_authorization};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let header = basic_authorization(&Credentials::new("my_key:"))?;
/// assert_eq!(header, "Basic bXlfa2V5Og==");
/// # Ok(())
/// # }
/// ```
pub fn basic_authorization(credentials: &Credentials) -> Result<String, CtsError> {
    if credentials.is_empty() {
        return Err(CtsError::CredentialMissing);
    }

    Ok(format!("Basic {}", BASE64.encode(credentials.api_key().as_bytes())))
}
