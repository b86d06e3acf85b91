//! Response shapes derived from stored records

use crate::store::SwiftCodeRecord;
use serde::{Deserialize, Serialize};

/// Flattened view of a single non-headquarters code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDetail {
    /// Postal address
    pub address: String,
    /// Name of the bank
    #[serde(rename = "bankName")]
    pub bank_name: String,
    /// Two-letter country code
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    /// Country display name
    #[serde(rename = "countryName")]
    pub country_name: String,
    /// Whether the code ends with `XXX`
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    /// The SWIFT/BIC code
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
}

impl From<SwiftCodeRecord> for BranchDetail {
    fn from(record: SwiftCodeRecord) -> Self {
        Self {
            address: record.address,
            bank_name: record.bank_name,
            country_iso2: record.country_iso2,
            country_name: record.country_name,
            is_headquarter: false,
            swift_code: record.swift_code,
        }
    }
}

/// Headquarters view with the branches sharing its prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadquartersDetail {
    /// Postal address
    pub address: String,
    /// Name of the bank
    #[serde(rename = "bankName")]
    pub bank_name: String,
    /// Two-letter country code
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    /// Country display name
    #[serde(rename = "countryName")]
    pub country_name: String,
    /// Whether the code ends with `XXX`
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    /// The SWIFT/BIC code
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
    /// Branches sharing the headquarters prefix, in store order
    pub branches: Vec<BankSummary>,
}

impl HeadquartersDetail {
    /// Build from the headquarters record and its branch summaries
    pub fn new(headquarters: SwiftCodeRecord, branches: Vec<BankSummary>) -> Self {
        Self {
            address: headquarters.address,
            bank_name: headquarters.bank_name,
            country_iso2: headquarters.country_iso2,
            country_name: headquarters.country_name,
            is_headquarter: true,
            swift_code: headquarters.swift_code,
            branches,
        }
    }
}

/// Summary entry used inside branch and country lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    /// Postal address
    pub address: String,
    /// Name of the bank
    #[serde(rename = "bankName")]
    pub bank_name: String,
    /// Two-letter country code
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    /// Country display name
    #[serde(
        rename = "countryName",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub country_name: String,
    /// Whether the code ends with `XXX`
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    /// The SWIFT/BIC code
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
}

impl From<SwiftCodeRecord> for BankSummary {
    fn from(record: SwiftCodeRecord) -> Self {
        Self {
            is_headquarter: record.is_headquarters(),
            address: record.address,
            bank_name: record.bank_name,
            country_iso2: record.country_iso2,
            country_name: String::new(),
            swift_code: record.swift_code,
        }
    }
}

/// All codes registered for one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryListing {
    /// Two-letter country code
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    /// Country display name
    #[serde(rename = "countryName")]
    pub country_name: String,
    /// Codes registered under the country, in store order
    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<BankSummary>,
}

/// Outcome of looking up a single code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLookup {
    /// The code resolved to a headquarters and its branches
    Headquarters(HeadquartersDetail),
    /// The code resolved to a single branch
    Branch(BranchDetail),
    /// Nothing matched
    NotFound,
}
