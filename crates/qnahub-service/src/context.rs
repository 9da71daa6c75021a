//! Request context carrying the authenticated caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted at the HTTP boundary and passed into service methods so that
/// every mutating operation knows *who* is acting. The identity is already
/// verified by the time a context exists; the service never re-checks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated caller's user ID.
    pub user_id: Uuid,
    /// The caller's display name (convenience field from the token claims).
    pub name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, name: String) -> Self {
        Self {
            user_id,
            name,
            request_time: Utc::now(),
        }
    }
}
