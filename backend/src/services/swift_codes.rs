//! SWIFT code classification and aggregation
//!
//! Turns raw store records into headquarters, branch and country views.

use crate::services::responses::{BankSummary, BranchDetail, CountryListing, HeadquartersDetail};
use crate::store::{StoreError, SwiftCodeRecord, SwiftCodeStore, HEADQUARTERS_SUFFIX};
use std::sync::Arc;
use tracing::debug;

/// SWIFT code service
///
/// Store errors are passed through unchanged; mapping them to HTTP
/// responses is the handler's job.
#[derive(Clone)]
pub struct SwiftCodeService {
    store: Arc<dyn SwiftCodeStore>,
}

impl SwiftCodeService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn SwiftCodeStore>) -> Self {
        Self { store }
    }

    /// Resolve a headquarters by the part of its code before `XXX`
    ///
    /// # Returns
    /// * `Ok(Some(detail))` - Headquarters found, with every other record
    ///   sharing the prefix as a branch
    /// * `Ok(None)` - No record, or no `prefix + "XXX"` record among them
    /// * `Err(StoreError)` - Store call failed
    pub async fn headquarters_details(
        &self,
        prefix: &str,
    ) -> Result<Option<HeadquartersDetail>, StoreError> {
        let records = self.store.find_by_prefix(prefix).await?;
        let headquarters_code = format!("{}{}", prefix, HEADQUARTERS_SUFFIX);

        let mut headquarters = None;
        let mut branches = Vec::new();
        for record in records {
            if record.swift_code == headquarters_code {
                headquarters = Some(record);
            } else {
                branches.push(BankSummary {
                    is_headquarter: false,
                    ..BankSummary::from(record)
                });
            }
        }

        debug!(
            prefix = %prefix,
            found = headquarters.is_some(),
            branches = branches.len(),
            "Grouped records by prefix"
        );

        Ok(headquarters.map(|hq| HeadquartersDetail::new(hq, branches)))
    }

    /// Look up a single code and render it as a branch
    ///
    /// The result is a branch view even when the code carries the `XXX`
    /// suffix.
    pub async fn branch_details(&self, code: &str) -> Result<Option<BranchDetail>, StoreError> {
        let record = self.store.find_by_code(code).await?;
        Ok(record.map(BranchDetail::from))
    }

    /// List every code registered under a country
    ///
    /// An unknown country yields an empty listing with an empty name.
    pub async fn codes_by_country(&self, iso2: &str) -> Result<CountryListing, StoreError> {
        let country_name = self.store.find_country_name(iso2).await?;
        let records = self.store.find_by_country(iso2).await?;

        Ok(CountryListing {
            country_iso2: iso2.to_string(),
            country_name,
            swift_codes: records.into_iter().map(BankSummary::from).collect(),
        })
    }

    /// Country name recorded for an ISO2 code, empty when unknown
    pub async fn country_name(&self, iso2: &str) -> Result<String, StoreError> {
        self.store.find_country_name(iso2).await
    }

    /// Store a new record
    ///
    /// A duplicate code surfaces as whatever error the store raises.
    pub async fn add_swift_code(&self, record: &SwiftCodeRecord) -> Result<(), StoreError> {
        self.store.insert(record).await
    }

    /// Remove a record by exact code
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - No row matched
    pub async fn delete_swift_code(&self, code: &str) -> Result<(), StoreError> {
        match self.store.delete_by_code(code).await? {
            0 => Err(StoreError::NotFound(code.to_string())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySwiftCodeStore;
    use crate::test_support::{record, FailingStore};

    fn service_with(records: Vec<SwiftCodeRecord>) -> SwiftCodeService {
        SwiftCodeService::new(Arc::new(InMemorySwiftCodeStore::with_records(records)))
    }

    #[tokio::test]
    async fn test_headquarters_groups_branches() {
        let service = service_with(vec![
            record("BANKPLPPABC", "PL", "POLAND"),
            record("BANKPLPPXXX", "PL", "POLAND"),
            record("BANKPLPPDEF", "PL", "POLAND"),
            record("OTHRPLPPXXX", "PL", "POLAND"),
        ]);

        let detail = service
            .headquarters_details("BANKPLPP")
            .await
            .unwrap()
            .expect("headquarters should be found");

        assert_eq!(detail.swift_code, "BANKPLPPXXX");
        assert!(detail.is_headquarter);
        assert_eq!(detail.country_name, "POLAND");
        let branch_codes: Vec<&str> = detail
            .branches
            .iter()
            .map(|b| b.swift_code.as_str())
            .collect();
        assert_eq!(branch_codes, vec!["BANKPLPPABC", "BANKPLPPDEF"]);
        assert!(detail.branches.iter().all(|b| !b.is_headquarter));
        assert!(detail.branches.iter().all(|b| b.country_name.is_empty()));
    }

    #[tokio::test]
    async fn test_headquarters_without_branches() {
        let service = service_with(vec![record("BANKPLPPXXX", "PL", "POLAND")]);

        let detail = service.headquarters_details("BANKPLPP").await.unwrap().unwrap();
        assert!(detail.branches.is_empty());
    }

    #[tokio::test]
    async fn test_headquarters_missing_returns_none() {
        let service = service_with(vec![record("BANKPLPPABC", "PL", "POLAND")]);
        assert_eq!(service.headquarters_details("BANKPLPP").await.unwrap(), None);

        let empty = service_with(Vec::new());
        assert_eq!(empty.headquarters_details("BANKPLPP").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_only_exact_headquarters_code_is_headquarters() {
        // "BANKP" + "XXX" is the headquarters; the longer XXX code is a branch
        let service = service_with(vec![
            record("BANKPLPPXXX", "PL", "POLAND"),
            record("BANKPXXX", "PL", "POLAND"),
        ]);

        let detail = service.headquarters_details("BANKP").await.unwrap().unwrap();
        assert_eq!(detail.swift_code, "BANKPXXX");
        assert_eq!(detail.branches.len(), 1);
        assert_eq!(detail.branches[0].swift_code, "BANKPLPPXXX");
        assert!(!detail.branches[0].is_headquarter);
    }

    #[tokio::test]
    async fn test_branch_details() {
        let service = service_with(vec![
            record("BANKPLPPABC", "PL", "POLAND"),
            record("BANKPLPPXXX", "PL", "POLAND"),
        ]);

        let branch = service.branch_details("BANKPLPPABC").await.unwrap().unwrap();
        assert_eq!(branch.swift_code, "BANKPLPPABC");
        assert!(!branch.is_headquarter);

        // Rendered as a branch regardless of suffix
        let hq_as_branch = service.branch_details("BANKPLPPXXX").await.unwrap().unwrap();
        assert!(!hq_as_branch.is_headquarter);

        assert_eq!(service.branch_details("NOPEPLPPABC").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_codes_by_country() {
        let service = service_with(vec![
            record("BANKPLPPXXX", "PL", "POLAND"),
            record("BANKPLPPABC", "PL", "POLAND"),
            record("BANKDEFFXXX", "DE", "GERMANY"),
        ]);

        let listing = service.codes_by_country("PL").await.unwrap();
        assert_eq!(listing.country_iso2, "PL");
        assert_eq!(listing.country_name, "POLAND");
        assert_eq!(listing.swift_codes.len(), 2);
        assert!(listing.swift_codes[0].is_headquarter);
        assert!(!listing.swift_codes[1].is_headquarter);
    }

    #[tokio::test]
    async fn test_codes_by_unknown_country_is_empty() {
        let service = service_with(vec![record("BANKPLPPXXX", "PL", "POLAND")]);

        let listing = service.codes_by_country("FR").await.unwrap();
        assert_eq!(listing.country_name, "");
        assert!(listing.swift_codes.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_code_is_not_found() {
        let service = service_with(vec![record("BANKPLPPABC", "PL", "POLAND")]);

        service.delete_swift_code("BANKPLPPABC").await.unwrap();
        let err = service.delete_swift_code("BANKPLPPABC").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref code) if code == "BANKPLPPABC"));
        assert_eq!(err.to_string(), "SWIFT code BANKPLPPABC not found");
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let service = SwiftCodeService::new(Arc::new(FailingStore));

        assert!(service.headquarters_details("BANKPLPP").await.is_err());
        assert!(service.branch_details("BANKPLPPABC").await.is_err());
        assert!(service.codes_by_country("PL").await.is_err());
        assert!(matches!(
            service.delete_swift_code("BANKPLPPABC").await,
            Err(StoreError::Database(_))
        ));
    }
}
