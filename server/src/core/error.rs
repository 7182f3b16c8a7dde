use crate::services::{EntityKind, ServiceError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Error returned by every handler, rendered as a plain-text body
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Accounts and stores answer a missing row with 404, everything else with 400
pub fn not_found_status(kind: EntityKind) -> StatusCode {
    match kind {
        EntityKind::Account | EntityKind::Store => StatusCode::NOT_FOUND,
        EntityKind::Employee
        | EntityKind::Role
        | EntityKind::Customer
        | EntityKind::Product
        | EntityKind::Supplier
        | EntityKind::GoodsSupplierLink => StatusCode::BAD_REQUEST,
    }
}

/// Body for a missing row; accounts answer with a bare "not found"
fn not_found_message(kind: EntityKind) -> String {
    match kind {
        EntityKind::Account => "not found".to_string(),
        other => ServiceError::NotFound(other).to_string(),
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(kind) => {
                warn!("{kind} not found");
                Self::new(not_found_status(kind), not_found_message(kind))
            }
            ServiceError::Data(_) | ServiceError::PasswordHash(_) | ServiceError::HashTask(_) => {
                error!("Service failure: {err}");
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
