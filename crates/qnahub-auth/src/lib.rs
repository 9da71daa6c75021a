//! # qnahub-auth
//!
//! Bearer token verification for the HTTP boundary. Tokens are issued by
//! the external identity provider; this crate only decodes and validates
//! them to recover the caller's identity reference.

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
