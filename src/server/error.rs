//! Response envelope and error-to-HTTP conversion.
//!
//! Successful handlers answer `{"success": true, "data": ...}`; failures
//! answer `{"success": false, "error": "..."}` with no `data` field.

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::Error;

/// Success envelope around a handler's payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Wrap `data` in a success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

/// Wrapper so handlers can return `Result<T, AppError>` and use `?` on
/// crate errors.
pub struct AppError {
    inner: Error,
    route: Option<&'static str>,
    ids: Option<String>,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self {
            inner,
            route: None,
            ids: None,
        }
    }

    /// Tag the error with the route that produced it, for the error log.
    pub fn in_route(mut self, route: &'static str) -> Self {
        self.route = Some(route);
        self
    }

    /// Attach the request's ids (e.g. `"id=1399 season=2"`) for the error log.
    pub fn with_ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            match &self.inner {
                Error::Upstream { operation, source } => tracing::error!(
                    status = %status,
                    route = self.route,
                    ids = self.ids.as_deref(),
                    operation,
                    error = %source,
                    "Upstream failure in API handler"
                ),
                other => tracing::error!(
                    status = %status,
                    route = self.route,
                    ids = self.ids.as_deref(),
                    error = %other,
                    "Server error in API handler"
                ),
            }
        }

        let body = json!({
            "success": false,
            "error": self.inner.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

/// `Query` whose rejection is answered with the error envelope instead of
/// axum's plain-text body.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::new(Error::client(rejection.body_text())))?;
        Ok(Self(value))
    }
}
