//! JWT decoding and validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use qnahub_core::config::AuthConfig;
use qnahub_core::error::AppError;
use qnahub_core::result::AppResult;

use crate::claims::Claims;

/// Decodes and validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    /// Create a decoder from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decode a bearer token into its claims.
    ///
    /// Signature mismatch, malformed tokens, and expired tokens all map to
    /// an `Authentication` error.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid access token: {e}")))
    }
}
