//! Request body extractors
//!
//! Both extractors reject through [`crate::Error`], so a malformed body
//! gets the same opaque 500 answer as any other unhandled failure. There
//! is no dedicated 400 path at this layer.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// JSON request body (`application/json`), deserialized into `T`.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::invalid_body(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// URL-encoded form body (`application/x-www-form-urlencoded`) with
/// extended syntax: nested and array-style keys such as `a[0]=1&a[1]=2`
/// decode into structured values.
pub struct FormBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Error::invalid_body(rejection.body_text()))?;

        let value = serde_qs::from_bytes(&bytes).map_err(|e| Error::invalid_body(e.to_string()))?;

        Ok(Self(value))
    }
}
