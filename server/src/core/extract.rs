//! Request extractors
//!
//! Thin wrappers over axum's `Json` and `Path` whose rejections come back as
//! an `AppError` (400 with the decoder's message as plain text).

use super::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use axum_macros::FromRequestParts;
use serde::de::DeserializeOwned;

/// JSON request body. The `Content-Type` header is not checked: any body
/// that decodes is accepted.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        let axum::Json(value) = axum::Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);
