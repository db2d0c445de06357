use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::FieldErrors;
use serde_json::json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler failure, rendered as a JSON body with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 422 with `{message, errors: {field: [..]}}`
    #[error("the given data was invalid: {0}")]
    Validation(FieldErrors),
    #[error("{0}")]
    NotFound(String),
    /// Request rejected by an extractor before reaching the handler body.
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected(status, _) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(f) => ApiError::Validation(f),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError::Rejected(r.status(), r.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(errors) => json!({
                "message": "The given data was invalid.",
                "errors": errors,
            }),
            ApiError::NotFound(msg) | ApiError::Rejected(_, msg) => json!({"message": msg}),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                json!({"message": "Server Error"})
            }
        };
        (status, Json(body)).into_response()
    }
}
