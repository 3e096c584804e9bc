use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::domain::error::DomainError;

/// Key used when a failure is not tied to a single request field.
pub const VALIDATION_ERROR_KEY: &str = "Validation error";

/// Everything a booking/room handler can fail with.
#[derive(Debug)]
pub enum RestError {
    Domain(DomainError),
    /// Absent required fields keyed by JSON field name, plus any window rule
    /// broken at the same time.
    MissingFields(BTreeMap<String, String>),
    /// Body or query string that could not be parsed.
    BadInput(String),
}

impl From<DomainError> for RestError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadInput(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadInput(rejection.body_text())
    }
}

fn validation_body(message: impl Into<String>) -> Json<BTreeMap<String, String>> {
    Json(BTreeMap::from([(VALIDATION_ERROR_KEY.to_string(), message.into())]))
}

/// Map a domain error onto status + body.
pub fn map_domain_error(e: &DomainError) -> Response {
    match e {
        DomainError::RoomAlreadyExists { .. } | DomainError::BookingOverlap => {
            (StatusCode::CONFLICT, e.to_string()).into_response()
        }
        DomainError::RoomNotFound { .. } | DomainError::BookingNotFound { .. } => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        DomainError::PastBooking { .. } => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        DomainError::InvalidBooking(rule) => {
            (StatusCode::BAD_REQUEST, validation_body(rule.to_string())).into_response()
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal database error occurred",
            )
                .into_response()
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(e) => map_domain_error(&e),
            Self::MissingFields(fields) => (StatusCode::BAD_REQUEST, Json(fields)).into_response(),
            Self::BadInput(message) => {
                (StatusCode::BAD_REQUEST, validation_body(message)).into_response()
            }
        }
    }
}
