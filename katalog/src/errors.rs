//! API error handling.
//!
//! Every handler returns [`Error`], and its [`IntoResponse`] impl is the only
//! place a failure becomes an HTTP response. Status mapping:
//!
//! - validation failures (bad id, missing fields) are 400
//! - lookups that matched nothing are 404
//! - anything that went wrong inside the database or the application is 500
//!
//! The JSON body is asymmetric on purpose: 404 responses carry a `message`
//! key, every other error carries an `error` key. Clients match on that shape.
//! Internal failures never leak their cause to the client, the detail goes to
//! the log instead.

use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {resource} ID: {given}")]
    InvalidId { resource: &'static str, given: String },

    #[error("Missing required fields: {required}")]
    MissingFields { required: &'static str },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidId { .. } | Error::MissingFields { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            // A repository read that found nothing surfaces as 404, not 500
            Error::Database(DbError::NotFound) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The string the client sees. Server-side failures collapse to a generic
    /// message, the cause stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidId { resource, given } => format!("Invalid {resource} ID: {given}"),
            Error::MissingFields { required } => format!("All fields are required: {required}"),
            Error::NotFound { resource } => format!("{resource} not found"),
            Error::Database(DbError::NotFound) => "Resource not found".to_string(),
            Error::Database(_) | Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Database(DbError::ForeignKeyViolation { .. }) => {
                tracing::warn!("Constraint violation: {:#}", self);
            }
            Error::Database(_) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            _ => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        // 404 responses use a `message` key, everything else uses `error`
        let body = if status == StatusCode::NOT_FOUND {
            json!({ "message": self.user_message() })
        } else {
            json!({ "error": self.user_message() })
        };

        (status, Json(body)).into_response()
    }
}
