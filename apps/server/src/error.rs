//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use touchline_core::clubs::ClubError;
use touchline_core::errors::DatabaseError;
use touchline_core::transfers::TransferError;
use touchline_core::users::AuthError;
use touchline_core::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning a core error into an HTTP response with a
/// `{ code, message }` JSON body.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

fn classify(err: &Error) -> (StatusCode, &'static str) {
    match err {
        Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        }
        Error::Duplicate(_) | Error::Database(DatabaseError::UniqueViolation(_)) => {
            (StatusCode::CONFLICT, "DUPLICATE")
        }
        Error::Auth(AuthError::TokenExpired) => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED"),
        Error::Auth(AuthError::TokenInvalid) => (StatusCode::UNAUTHORIZED, "TOKEN_INVALID"),
        Error::Auth(AuthError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        }
        Error::Auth(AuthError::MissingToken) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        Error::Transfer(TransferError::InsufficientBudget { .. }) => {
            (StatusCode::BAD_REQUEST, "INSUFFICIENT_BUDGET")
        }
        Error::Transfer(TransferError::OfferRejected { .. }) => {
            (StatusCode::CONFLICT, "OFFER_REJECTED")
        }
        Error::Transfer(_) => (StatusCode::CONFLICT, "TRANSFER_CONFLICT"),
        Error::Club(ClubError::NameTaken(_)) => (StatusCode::CONFLICT, "NAME_TAKEN"),
        Error::Club(ClubError::AlreadyWatched) => (StatusCode::CONFLICT, "ALREADY_WATCHED"),
        Error::Club(ClubError::EmptyRoster) => (StatusCode::CONFLICT, "EMPTY_ROSTER"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = classify(&self.0);
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Details stay in the logs.
            tracing::error!(error = %self.0, "request failed");
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };
        (status, Json(json!({ "code": code, "message": message }))).into_response()
    }
}
