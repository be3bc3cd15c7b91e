use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::api::envelope::Envelope;
use crate::error::StoreError;

/// Every failure leaving the HTTP boundary. Converted to the envelope, never
/// propagated as a bare framework error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Invalid username or password")]
    Unauthorized,
    #[error("Endpoint not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Validation(_) | StoreError::Conflict(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(StoreError::NotFound { .. }) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(StoreError::ActorCommunication(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text placed in the envelope's `error` field. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::Validation(msg) | StoreError::Conflict(msg)) | Self::BadRequest(msg) => {
                msg.clone()
            }
            Self::Store(StoreError::NotFound { kind, .. }) => format!("{kind} not found"),
            Self::Store(StoreError::ActorCommunication(_)) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            Self::Unauthorized | Self::RouteNotFound | Self::MethodNotAllowed => self.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(Envelope::failure(self.public_message()))).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Turns a handler panic into the 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
