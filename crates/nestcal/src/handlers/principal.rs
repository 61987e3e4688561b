//! Principal extraction.
//!
//! Authentication lives in front of this service: an external token issuer
//! verifies the caller and injects the authenticated user id as a request
//! header. The extractor only parses that header; requests without a valid
//! identity are rejected with 401.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use uuid::Uuid;

/// Name of the upstream-injected identity header.
pub const PRINCIPAL_HEADER: &str = "x-user-id";

/// The authenticated user on whose behalf the request runs.
pub struct Principal(pub Uuid);

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .ok_or((StatusCode::UNAUTHORIZED, "Missing identity header"))?;

        let value = header
            .to_str()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid identity header"))?;

        let user_id = value
            .parse()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid identity header"))?;

        Ok(Principal(user_id))
    }
}
