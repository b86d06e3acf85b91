//! Shared fixtures for unit tests

use crate::store::{StoreError, SwiftCodeRecord, SwiftCodeStore};
use async_trait::async_trait;

/// Record with a fixed bank name and address
pub fn record(code: &str, iso2: &str, country: &str) -> SwiftCodeRecord {
    SwiftCodeRecord::new(code, iso2, country, "Test Bank", "Test Street 1")
}

/// Store whose every call fails as if the database were unreachable
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl SwiftCodeStore for FailingStore {
    async fn find_by_prefix(&self, _prefix: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<SwiftCodeRecord>, StoreError> {
        Err(unavailable())
    }

    async fn find_country_name(&self, _iso2: &str) -> Result<String, StoreError> {
        Err(unavailable())
    }

    async fn find_by_country(&self, _iso2: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _record: &SwiftCodeRecord) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete_by_code(&self, _code: &str) -> Result<u64, StoreError> {
        Err(unavailable())
    }
}

/// Store that knows every country but rejects inserts on the unique key
///
/// With `lookup_fails` set, the existence check errors too, so the insert is
/// the only place the duplicate is caught.
pub struct DuplicateOnInsertStore {
    pub lookup_fails: bool,
}

#[async_trait]
impl SwiftCodeStore for DuplicateOnInsertStore {
    async fn find_by_prefix(&self, _prefix: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<SwiftCodeRecord>, StoreError> {
        if self.lookup_fails {
            Err(unavailable())
        } else {
            Ok(None)
        }
    }

    async fn find_country_name(&self, _iso2: &str) -> Result<String, StoreError> {
        Ok("POLAND".to_string())
    }

    async fn find_by_country(&self, _iso2: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, record: &SwiftCodeRecord) -> Result<(), StoreError> {
        Err(StoreError::Duplicate(record.swift_code.clone()))
    }

    async fn delete_by_code(&self, _code: &str) -> Result<u64, StoreError> {
        Ok(0)
    }
}
