//! SWIFT code record model

use sqlx::FromRow;

/// Suffix marking a code as the institution's headquarters
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

/// Whether a SWIFT code has a valid length (8 or 11)
pub fn is_valid_swift_code(code: &str) -> bool {
    code.len() == 8 || code.len() == 11
}

/// Whether a country code is exactly two characters
pub fn is_valid_iso2(iso2: &str) -> bool {
    iso2.len() == 2
}

/// One stored SWIFT/BIC code
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SwiftCodeRecord {
    /// The 8 or 11 character code, unique across the table
    pub swift_code: String,
    /// Two-letter country code
    pub country_iso2: String,
    /// Country display name
    pub country_name: String,
    /// Name of the bank
    pub bank_name: String,
    /// Postal address, empty when unknown
    pub address: String,
    /// BIC8 / BIC11 marker from the import spreadsheet
    pub code_type: Option<String>,
    /// Town name from the import spreadsheet
    pub town_name: Option<String>,
    /// Time zone from the import spreadsheet
    pub time_zone: Option<String>,
}

impl SwiftCodeRecord {
    /// Create a record with no spreadsheet-only metadata
    pub fn new(
        swift_code: impl Into<String>,
        country_iso2: impl Into<String>,
        country_name: impl Into<String>,
        bank_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            swift_code: swift_code.into(),
            country_iso2: country_iso2.into(),
            country_name: country_name.into(),
            bank_name: bank_name.into(),
            address: address.into(),
            code_type: None,
            town_name: None,
            time_zone: None,
        }
    }

    /// Whether this code denotes the institution's headquarters
    pub fn is_headquarters(&self) -> bool {
        self.swift_code.ends_with(HEADQUARTERS_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headquarters_detection() {
        let hq = SwiftCodeRecord::new("BANKPLPPXXX", "PL", "POLAND", "Bank", "Street 1");
        let branch = SwiftCodeRecord::new("BANKPLPPABC", "PL", "POLAND", "Bank", "Street 2");
        assert!(hq.is_headquarters());
        assert!(!branch.is_headquarters());
    }
}
