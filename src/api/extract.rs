//! Request Extractors
//!
//! A JSON body extractor whose rejections use the gateway's error shape.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// Typed JSON body.
///
/// Bodies that are not JSON at all (missing content type, syntax error,
/// unreadable) reject with [`ApiError::BadRequest`]. JSON that does not fit
/// `T` rejects with [`ApiError::InvalidRequest`].
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(err)) => {
                Err(ApiError::InvalidRequest(err.body_text()))
            }
            Err(rejection) => {
                debug!("Rejected non-JSON body: {}", rejection.body_text());
                Err(ApiError::BadRequest)
            }
        }
    }
}
