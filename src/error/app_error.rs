use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::envelope::{
    Envelope, ResponseError, INVALID_PRODUCT_ID, INVALID_REQUEST_PAYLOAD, PRODUCT_NOT_FOUND,
};

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    BadRequest(String),
}

impl AppError {
    pub fn invalid_product_id() -> Self {
        AppError::BadRequest(INVALID_PRODUCT_ID.to_string())
    }

    pub fn product_not_found() -> Self {
        AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
    }

    pub fn invalid_request_payload() -> Self {
        AppError::BadRequest(INVALID_REQUEST_PAYLOAD.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::DatabaseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::InternalError(format!("migration failed: {}", err))
    }
}

impl From<&AppError> for ResponseError {
    fn from(err: &AppError) -> Self {
        let status = err.status_code();
        match err {
            AppError::DatabaseError(_) => ResponseError::new("Database error", status),
            AppError::ConfigError(_) => ResponseError::new("Server configuration error", status),
            AppError::InternalError(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg) => ResponseError::new(msg.as_str(), status),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::DatabaseError(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::ConfigError(ref msg) => tracing::error!("Configuration error: {}", msg),
            AppError::InternalError(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::NotFound(_) | AppError::BadRequest(_) => {}
        }

        let status = self.status_code();
        let body = Json(Envelope::failure(ResponseError::from(&self)));

        (status, body).into_response()
    }
}
