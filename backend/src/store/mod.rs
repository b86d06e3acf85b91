//! Record store module
//!
//! Defines the storage seam for SWIFT code records and its two backends:
//! a SQLite pool for the running service and an in-memory table for tests.

pub mod db;
pub mod error;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use db::SqliteSwiftCodeStore;
pub use error::StoreError;
pub use memory::InMemorySwiftCodeStore;
pub use models::{SwiftCodeRecord, HEADQUARTERS_SUFFIX};

/// Query and mutation operations the service needs from a SWIFT code table.
///
/// Implementations return records in insertion order. The `swift_code`
/// column is unique; inserting an existing code must fail.
#[async_trait]
pub trait SwiftCodeStore: Send + Sync {
    /// All records whose code starts with `prefix` (literal, case-sensitive)
    async fn find_by_prefix(&self, prefix: &str) -> Result<Vec<SwiftCodeRecord>, StoreError>;

    /// The record with exactly this code, if any
    async fn find_by_code(&self, code: &str) -> Result<Option<SwiftCodeRecord>, StoreError>;

    /// Country name recorded for an ISO2 code, or an empty string when no
    /// record carries it
    async fn find_country_name(&self, iso2: &str) -> Result<String, StoreError>;

    /// All records registered under an ISO2 code
    async fn find_by_country(&self, iso2: &str) -> Result<Vec<SwiftCodeRecord>, StoreError>;

    /// Insert a new record
    async fn insert(&self, record: &SwiftCodeRecord) -> Result<(), StoreError>;

    /// Delete by exact code, returning the number of rows removed
    async fn delete_by_code(&self, code: &str) -> Result<u64, StoreError>;
}
