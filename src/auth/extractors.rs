use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::error::{ApiError, AuthError};

/// Extracts and validates the bearer token, resolving it to the user ID.
/// A failed extraction terminates the request before the handler runs.
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;

        // Present but not valid UTF-8 is a malformed credential, not a missing one.
        let auth_header = auth_header.to_str().map_err(|_| AuthError::Malformed)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::Malformed)?;

        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            e
        })?;

        Ok(AuthUser(claims.sub))
    }
}
