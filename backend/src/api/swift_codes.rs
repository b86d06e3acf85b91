//! SWIFT code API handlers
//!
//! Validates requests, calls the service and maps outcomes to responses.

use crate::api::models::{InsertSwiftCodeRequest, MessageResponse};
use crate::api::validation::{
    headquarters_prefix, validate_insert_request, validate_iso2, validate_swift_code,
};
use crate::error::AppError;
use crate::services::CodeLookup;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// GET /v1/swift-codes/:code - Headquarters or branch details
///
/// Codes ending in `XXX` resolve through the prefix lookup and include
/// their branches; any other code is looked up exactly.
pub async fn get_swift_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    validate_swift_code(&code)?;

    let lookup = match headquarters_prefix(&code) {
        Some(prefix) => state
            .service
            .headquarters_details(prefix)
            .await
            .map(|detail| detail.map_or(CodeLookup::NotFound, CodeLookup::Headquarters)),
        None => state
            .service
            .branch_details(&code)
            .await
            .map(|detail| detail.map_or(CodeLookup::NotFound, CodeLookup::Branch)),
    }
    .map_err(|e| {
        error!(swift_code = %code, error = %e, "Failed to fetch SWIFT codes");
        AppError::FetchFailed(code.clone())
    })?;

    match lookup {
        CodeLookup::Headquarters(detail) => Ok(Json(detail).into_response()),
        CodeLookup::Branch(detail) => Ok(Json(detail).into_response()),
        CodeLookup::NotFound => Err(AppError::SwiftCodeNotFound(code)),
    }
}

/// GET /v1/swift-codes/country/:iso2 - All codes for a country
pub async fn get_swift_codes_by_country(
    State(state): State<Arc<AppState>>,
    Path(iso2): Path<String>,
) -> Result<Response, AppError> {
    let iso2 = iso2.to_uppercase();
    validate_iso2(&iso2)?;

    let listing = state.service.codes_by_country(&iso2).await.map_err(|e| {
        error!(iso2 = %iso2, error = %e, "Failed to fetch SWIFT codes for country");
        AppError::CountryFetchFailed(iso2.clone())
    })?;

    if listing.country_name.is_empty() {
        warn!(iso2 = %iso2, "ISO2 code is not valid");
        return Err(AppError::InvalidCountry(iso2));
    }

    Ok(Json(listing).into_response())
}

/// POST /v1/swift-codes - Add a new code
///
/// Validation runs in a fixed order and stops at the first failure:
/// payload shape, field checks, country name cross-check, duplicate check,
/// then the insert itself.
pub async fn add_swift_code(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsertSwiftCodeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Error binding JSON");
        AppError::InvalidPayload(rejection.body_text())
    })?;

    validate_insert_request(&request).inspect_err(|e| {
        warn!(swift_code = %request.swift_code, reason = %e, "Rejected insert payload");
    })?;

    let canonical_name = state
        .service
        .country_name(&request.country_iso2)
        .await
        .map_err(|e| {
            warn!(iso2 = %request.country_iso2, error = %e, "Country name lookup failed");
            AppError::InsertRejected(format!(
                "this iso2 code: {} does not exist.",
                request.country_iso2
            ))
        })?;

    if !canonical_name.is_empty()
        && canonical_name.to_lowercase() != request.country_name.to_lowercase()
    {
        warn!(
            iso2 = %request.country_iso2,
            expected = %canonical_name,
            given = %request.country_name,
            "Country name mismatch"
        );
        return Err(AppError::InsertRejected(format!(
            "country name {} does not match iso2 code {}.",
            request.country_name, request.country_iso2
        )));
    }

    // A failed lookup is not treated as a duplicate; the store's unique
    // constraint still guards the insert
    if let Ok(Some(_)) = state.service.branch_details(&request.swift_code).await {
        warn!(swift_code = %request.swift_code, "SWIFT code already exists");
        return Err(AppError::InsertRejected(format!(
            "{} already exists.",
            request.swift_code
        )));
    }

    let record = request.into_record();
    state.service.add_swift_code(&record).await.map_err(|e| {
        warn!(swift_code = %record.swift_code, error = %e, "Error inserting new code");
        AppError::InsertRejected(record.swift_code.clone())
    })?;

    info!(swift_code = %record.swift_code, "SWIFT code added");
    Ok(Json(MessageResponse::new(format!(
        "{} has been added to the database.",
        record.swift_code
    ))))
}

/// DELETE /v1/swift-codes/:code - Remove a code
pub async fn delete_swift_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .service
        .delete_swift_code(&code)
        .await
        .map_err(|e| {
            warn!(swift_code = %code, error = %e, "Error deleting code");
            match e {
                StoreError::NotFound(_) => AppError::DeleteNotFound(e.to_string()),
                other => AppError::DeleteFailed(other.to_string()),
            }
        })?;

    info!(swift_code = %code, "SWIFT code removed");
    Ok(Json(MessageResponse::new(format!("{} was removed.", code))))
}
