//! Service layer for business logic
//!
//! This module contains service abstractions that separate business logic
//! from HTTP handlers, making the code more modular and testable.

pub mod import;
pub mod responses;
pub mod swift_codes;

pub use import::{import_csv, ImportError, ImportSummary};
pub use responses::{BankSummary, BranchDetail, CodeLookup, CountryListing, HeadquartersDetail};
pub use swift_codes::SwiftCodeService;
