//! Token verification configuration.
//!
//! Token *issuance* belongs to the external identity provider; this service
//! only verifies bearer tokens signed with the shared secret.

use serde::{Deserialize, Serialize};

/// Bearer token verification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 shared secret used to verify access tokens.
    pub jwt_secret: String,
    /// Clock-skew leeway in seconds applied to `exp` validation.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    30
}
