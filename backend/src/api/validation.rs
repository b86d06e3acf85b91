//! Request validation helpers
//!
//! Shape checks applied by the handlers before anything reaches the store.

use crate::api::models::InsertSwiftCodeRequest;
use crate::error::AppError;
use crate::store::models::{is_valid_iso2, is_valid_swift_code};
use crate::store::HEADQUARTERS_SUFFIX;

/// Validate a SWIFT code taken from the request path
pub fn validate_swift_code(code: &str) -> Result<(), AppError> {
    if !is_valid_swift_code(code) {
        return Err(AppError::InvalidSwiftCode);
    }
    Ok(())
}

/// Validate a country code taken from the request path
pub fn validate_iso2(iso2: &str) -> Result<(), AppError> {
    if !is_valid_iso2(iso2) {
        return Err(AppError::InvalidIso2);
    }
    Ok(())
}

/// Part of the code before the `XXX` suffix, if it has one
///
/// # Examples
/// * `"BANKPLPPXXX"` -> `Some("BANKPLPP")`
/// * `"BANKPLPPABC"` -> `None`
pub fn headquarters_prefix(code: &str) -> Option<&str> {
    code.strip_suffix(HEADQUARTERS_SUFFIX)
}

/// Validate the self-contained fields of an insert payload
///
/// Checks, in order: ISO2 length, code length, headquarters flag against
/// the code suffix, non-empty address. Store-backed checks run afterwards
/// in the handler.
pub fn validate_insert_request(request: &InsertSwiftCodeRequest) -> Result<(), AppError> {
    let code = &request.swift_code;

    if !is_valid_iso2(&request.country_iso2) {
        return Err(AppError::InsertRejected(format!(
            "this iso2 code: {} does not exist.",
            request.country_iso2
        )));
    }

    if !is_valid_swift_code(code) {
        return Err(AppError::InsertRejected(format!(
            "{} swift code must be 8 or 11 characters long.",
            code
        )));
    }

    if request.is_headquarter != code.ends_with(HEADQUARTERS_SUFFIX) {
        return Err(AppError::InsertRejected(format!(
            "{} headquarter flag does not match the code suffix.",
            code
        )));
    }

    if request.address.is_empty() {
        return Err(AppError::InsertRejected(format!(
            "{} address cannot be empty.",
            code
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> InsertSwiftCodeRequest {
        InsertSwiftCodeRequest {
            address: "Test Street 1".to_string(),
            bank_name: "Test Bank".to_string(),
            country_iso2: "PL".to_string(),
            country_name: "POLAND".to_string(),
            is_headquarter: true,
            swift_code: "BANKPLPPXXX".to_string(),
        }
    }

    #[test]
    fn test_swift_code_length() {
        assert!(is_valid_swift_code("BANKPLPP"));
        assert!(is_valid_swift_code("BANKPLPPXXX"));
        for code in ["", "BANK", "BANKPLP", "BANKPLPPX", "BANKPLPPXX", "BANKPLPPXXXX"] {
            assert!(!is_valid_swift_code(code), "{code} should be rejected");
        }
    }

    #[test]
    fn test_iso2_length() {
        assert!(validate_iso2("PL").is_ok());
        assert!(matches!(validate_iso2("P"), Err(AppError::InvalidIso2)));
        assert!(matches!(validate_iso2("POL"), Err(AppError::InvalidIso2)));
    }

    #[test]
    fn test_headquarters_prefix() {
        assert_eq!(headquarters_prefix("BANKPLPPXXX"), Some("BANKPLPP"));
        assert_eq!(headquarters_prefix("BANKPXXX"), Some("BANKP"));
        assert_eq!(headquarters_prefix("BANKPLPPABC"), None);
        assert_eq!(headquarters_prefix("BANKPLPP"), None);
    }

    #[test]
    fn test_valid_insert_request() {
        assert!(validate_insert_request(&valid_request()).is_ok());

        let branch = InsertSwiftCodeRequest {
            is_headquarter: false,
            swift_code: "BANKPLPPABC".to_string(),
            ..valid_request()
        };
        assert!(validate_insert_request(&branch).is_ok());
    }

    #[test]
    fn test_insert_iso2_checked_before_code() {
        let request = InsertSwiftCodeRequest {
            country_iso2: "P".to_string(),
            swift_code: "BAD".to_string(),
            ..valid_request()
        };
        let err = validate_insert_request(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error inserting to database this iso2 code: P does not exist."
        );
    }

    #[test]
    fn test_insert_code_length() {
        let request = InsertSwiftCodeRequest {
            swift_code: "TESTTEE".to_string(),
            is_headquarter: false,
            ..valid_request()
        };
        let err = validate_insert_request(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error inserting to database TESTTEE swift code must be 8 or 11 characters long."
        );
    }

    #[test]
    fn test_insert_flag_must_match_suffix() {
        let flagged_branch = InsertSwiftCodeRequest {
            swift_code: "BANKPLPPABC".to_string(),
            is_headquarter: true,
            ..valid_request()
        };
        assert!(matches!(
            validate_insert_request(&flagged_branch),
            Err(AppError::InsertRejected(_))
        ));

        let unflagged_hq = InsertSwiftCodeRequest {
            is_headquarter: false,
            ..valid_request()
        };
        assert!(matches!(
            validate_insert_request(&unflagged_hq),
            Err(AppError::InsertRejected(_))
        ));
    }

    #[test]
    fn test_insert_requires_address() {
        let request = InsertSwiftCodeRequest {
            address: String::new(),
            ..valid_request()
        };
        let err = validate_insert_request(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error inserting to database BANKPLPPXXX address cannot be empty."
        );
    }
}
