//! Request and message types for the SWIFT code API

use crate::store::SwiftCodeRecord;
use serde::{Deserialize, Serialize};

/// Insert request payload
///
/// Missing fields fall back to their empty values and are caught by
/// validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsertSwiftCodeRequest {
    /// Postal address, must be non-empty
    pub address: String,
    /// Name of the bank
    #[serde(rename = "bankName")]
    pub bank_name: String,
    /// Two-letter country code
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    /// Country display name, checked against the stored name for the ISO2
    #[serde(rename = "countryName")]
    pub country_name: String,
    /// Must be true exactly when the code ends with `XXX`
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    /// The 8 or 11 character code
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
}

impl InsertSwiftCodeRequest {
    /// Map the payload into a record for the store
    pub fn into_record(self) -> SwiftCodeRecord {
        SwiftCodeRecord::new(
            self.swift_code,
            self.country_iso2,
            self.country_name,
            self.bank_name,
            self.address,
        )
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}
