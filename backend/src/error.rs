//! Error types and error handling for the application
//!
//! This module defines the HTTP-facing error vocabulary. Every variant
//! carries its user-facing text and converts into a `{"message": ...}`
//! response with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Path code is not 8 or 11 characters long
    #[error("Invalid SWIFT code length. It must be either 8 or 11 characters long.")]
    InvalidSwiftCode,

    /// Path country code is not 2 characters long
    #[error("Invalid ISO2 code length. It must be 2 characters long.")]
    InvalidIso2,

    /// Request body could not be deserialized
    #[error("{0}")]
    InvalidPayload(String),

    /// Insert payload failed validation or the store rejected it
    #[error("Error inserting to database {0}")]
    InsertRejected(String),

    /// No record answers the requested code
    #[error("No SWIFT code found for: {0}")]
    SwiftCodeNotFound(String),

    /// Store failed while looking up a code
    #[error("Failed to fetch SWIFT codes for: {0}")]
    FetchFailed(String),

    /// Store failed while listing a country
    #[error("Failed to fetch SWIFT codes for ISO2 code: {0}")]
    CountryFetchFailed(String),

    /// No stored record carries this country code
    #[error("ISO2 code {0} is not valid.")]
    InvalidCountry(String),

    /// Delete matched no record
    #[error("Could not delete a record {0}")]
    DeleteNotFound(String),

    /// Delete failed in the store
    #[error("Could not delete a record {0}")]
    DeleteFailed(String),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSwiftCode
            | AppError::InvalidIso2
            | AppError::InvalidPayload(_)
            | AppError::InsertRejected(_) => StatusCode::BAD_REQUEST,
            AppError::SwiftCodeNotFound(_) | AppError::DeleteNotFound(_) => StatusCode::NOT_FOUND,
            // An unknown country is reported as a server error
            AppError::InvalidCountry(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FetchFailed(_)
            | AppError::CountryFetchFailed(_)
            | AppError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
