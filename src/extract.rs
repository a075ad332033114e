use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::warn;

use crate::error::ApiError;

/// JSON body extractor whose rejection follows the API error contract: a body
/// that does not deserialize is a 400 with a stable message, not a framework
/// rejection leaking deserializer detail.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "request body rejected");
            ApiError::Validation("invalid request body")
        })?;
        Ok(AppJson(value))
    }
}
