//! Error classification and HTTP error responses.
//!
//! Domain errors never pick their own status code. [`classify`] assigns each
//! [`ProductError`] a [`StatusCategory`], and `From<ProductError> for AppError`
//! is the only route by which a domain error reaches the wire.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::ProductError;

/// Message sent for backend faults; the detail stays in the logs.
const INTERNAL_MESSAGE: &str = "internal server error";

/// Transport-level outcome class of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    BadRequest,
    Conflict,
    NotFound,
    Internal,
}

impl StatusCategory {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps a domain error to its status category.
///
/// | Error                          | Category     |
/// |--------------------------------|--------------|
/// | any validation rule            | `BadRequest` |
/// | `DuplicateCode`                | `Conflict`   |
/// | `NotFound`                     | `NotFound`   |
/// | `Timeout`, `Cancelled`, `Storage` | `Internal` |
pub fn classify(error: &ProductError) -> StatusCategory {
    match error {
        ProductError::Validation(_) => StatusCategory::BadRequest,
        ProductError::DuplicateCode => StatusCategory::Conflict,
        ProductError::NotFound => StatusCategory::NotFound,
        ProductError::Timeout | ProductError::Cancelled | ProductError::Storage(_) => {
            StatusCategory::Internal
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Error returned by HTTP handlers, rendered as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            message: match self {
                AppError::BadRequest { message }
                | AppError::NotFound { message }
                | AppError::Conflict { message }
                | AppError::Internal { message } => message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ProductError> for AppError {
    fn from(e: ProductError) -> Self {
        if let ProductError::Storage(_) = e {
            return AppError::internal(INTERNAL_MESSAGE);
        }

        let message = e.to_string();
        match classify(&e) {
            StatusCategory::BadRequest => AppError::bad_request(message),
            StatusCategory::Conflict => AppError::conflict(message),
            StatusCategory::NotFound => AppError::not_found(message),
            StatusCategory::Internal => AppError::internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
