use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const CAFE_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";
pub const LOCATION_NOT_FOUND: &str = "Sorry, we don't have a cafe at that location.";
pub const NO_CAFES: &str = "Sorry, there are no cafes in the database yet.";
pub const FORBIDDEN: &str = "Sorry, that's not allowed. Make sure you have the correct api-key.";
const STORAGE_UNAVAILABLE: &str = "Sorry, the cafe database is unavailable right now.";

/// JSON error body of the form `{"error": {"<title>": "<message>"}}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: impl Into<String>) -> Self {
        Self { status, title, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden", FORBIDDEN)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut detail = serde_json::Map::new();
        detail.insert(self.title.to_string(), serde_json::Value::String(self.message));
        let body = serde_json::json!({ "error": detail });
        (self.status, Json(body)).into_response()
    }
}

/// Extractor rejections keep axum's status and message but use the JSON body.
fn from_rejection(status: StatusCode, message: String) -> JsonApiError {
    JsonApiError::new(status, status.canonical_reason().unwrap_or("Bad Request"), message)
}

impl From<FormRejection> for JsonApiError {
    fn from(rejection: FormRejection) -> Self {
        from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::not_found(CAFE_NOT_FOUND),
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::Forbidden(_) => Self::forbidden(),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", STORAGE_UNAVAILABLE)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
}
