//! Query-string extractor whose rejection is an enveloped 400

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(ApiQuery(value)),
                Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
            }
        }
    }
}
