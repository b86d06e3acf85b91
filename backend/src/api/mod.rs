//! API module
//!
//! Contains HTTP request handlers for the SWIFT code endpoints and the
//! router that wires them together.

pub mod models;
pub mod swift_codes;
pub mod validation;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use models::HealthResponse;
use std::sync::Arc;

/// Build the application router
///
/// # Arguments
/// * `state` - Shared application state
/// * `prefix` - Path prefix for the SWIFT code routes, e.g. `/v1/swift-codes`;
///   leading and trailing slashes are normalized
pub fn router(state: Arc<AppState>, prefix: &str) -> Router {
    let prefix = match prefix.trim_matches('/') {
        "" => String::new(),
        trimmed => format!("/{trimmed}"),
    };

    let mut router = Router::new().route("/api/health", get(health_check));
    if !prefix.is_empty() {
        router = router.route(&prefix, post(swift_codes::add_swift_code));
    }

    router
        .route(&format!("{prefix}/"), post(swift_codes::add_swift_code))
        .route(
            &format!("{prefix}/:code"),
            get(swift_codes::get_swift_code).delete(swift_codes::delete_swift_code),
        )
        .route(
            &format!("{prefix}/country/:iso2"),
            get(swift_codes::get_swift_codes_by_country),
        )
        .with_state(state)
}

/// GET /api/health - Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "SWIFT code service is healthy".to_string(),
    })
}
