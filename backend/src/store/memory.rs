//! In-memory record store
//!
//! Keeps records in insertion order behind a `RwLock` and enforces the same
//! unique-code constraint as the SQLite table.

use crate::store::error::StoreError;
use crate::store::models::SwiftCodeRecord;
use crate::store::SwiftCodeStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// SWIFT code table held in process memory
#[derive(Debug, Default)]
pub struct InMemorySwiftCodeStore {
    records: RwLock<Vec<SwiftCodeRecord>>,
}

impl InMemorySwiftCodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records, in order
    pub fn with_records(records: Vec<SwiftCodeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SwiftCodeStore for InMemorySwiftCodeStore {
    async fn find_by_prefix(&self, prefix: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.swift_code.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<SwiftCodeRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.swift_code == code).cloned())
    }

    async fn find_country_name(&self, iso2: &str) -> Result<String, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.country_iso2 == iso2)
            .map(|r| r.country_name.clone())
            .unwrap_or_default())
    }

    async fn find_by_country(&self, iso2: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.country_iso2 == iso2)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: &SwiftCodeRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.swift_code == record.swift_code) {
            return Err(StoreError::Duplicate(record.swift_code.clone()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn delete_by_code(&self, code: &str) -> Result<u64, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.swift_code != code);
        Ok((before - records.len()) as u64)
    }
}
