//! Bulk import of the SWIFT code spreadsheet
//!
//! Reads the CSV export with columns `COUNTRY ISO2 CODE, SWIFT CODE,
//! CODE TYPE, NAME, ADDRESS, TOWN NAME, COUNTRY NAME, TIME ZONE` and
//! inserts each usable row.

use crate::store::models::{is_valid_iso2, is_valid_swift_code};
use crate::store::{StoreError, SwiftCodeRecord, SwiftCodeStore};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort an import
#[derive(Error, Debug)]
pub enum ImportError {
    /// The CSV could not be read or a row could not be decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The store failed for a reason other than a duplicate code
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Counts reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written to the store
    pub inserted: usize,
    /// Rows with an invalid code or ISO2
    pub invalid: usize,
    /// Rows whose code was already stored
    pub duplicates: usize,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetRow {
    #[serde(rename = "COUNTRY ISO2 CODE")]
    country_iso2: String,
    #[serde(rename = "SWIFT CODE")]
    swift_code: String,
    #[serde(rename = "CODE TYPE", default)]
    code_type: String,
    #[serde(rename = "NAME")]
    bank_name: String,
    #[serde(rename = "ADDRESS", default)]
    address: String,
    #[serde(rename = "TOWN NAME", default)]
    town_name: String,
    #[serde(rename = "COUNTRY NAME", default)]
    country_name: String,
    #[serde(rename = "TIME ZONE", default)]
    time_zone: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl SpreadsheetRow {
    fn into_record(self) -> SwiftCodeRecord {
        SwiftCodeRecord {
            swift_code: self.swift_code.trim().to_string(),
            country_iso2: self.country_iso2.trim().to_uppercase(),
            country_name: self.country_name.trim().to_uppercase(),
            bank_name: self.bank_name.trim().to_string(),
            address: self.address.trim().to_string(),
            code_type: non_empty(&self.code_type),
            town_name: non_empty(&self.town_name),
            time_zone: non_empty(&self.time_zone),
        }
    }
}

/// Import every valid row from a spreadsheet export
pub async fn import_csv<R: Read>(
    reader: R,
    store: &dyn SwiftCodeStore,
) -> Result<ImportSummary, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut summary = ImportSummary::default();

    for row in csv_reader.deserialize::<SpreadsheetRow>() {
        let record = row?.into_record();

        if !is_valid_swift_code(&record.swift_code) || !is_valid_iso2(&record.country_iso2) {
            warn!(
                swift_code = %record.swift_code,
                iso2 = %record.country_iso2,
                "Skipping row with invalid code or ISO2"
            );
            summary.invalid += 1;
            continue;
        }

        // Duplicate rows are skipped, not fatal
        if store.find_by_code(&record.swift_code).await?.is_some() {
            summary.duplicates += 1;
            continue;
        }

        store.insert(&record).await?;
        summary.inserted += 1;
    }

    info!(
        inserted = summary.inserted,
        invalid = summary.invalid,
        duplicates = summary.duplicates,
        "Import finished"
    );
    Ok(summary)
}
