//! SQLite-backed record store
//!
//! Handles all database interactions for the `swift_codes` table.

use crate::store::error::StoreError;
use crate::store::models::SwiftCodeRecord;
use crate::store::SwiftCodeStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

const RECORD_COLUMNS: &str =
    "swift_code, country_iso2, country_name, bank_name, address, code_type, town_name, time_zone";

/// Database connection pool for SWIFT code records
pub struct SqliteSwiftCodeStore {
    pool: SqlitePool,
}

impl SqliteSwiftCodeStore {
    /// Initialize database connection pool and apply the schema
    ///
    /// # Arguments
    /// * `db_path` - SQLite file path or `sqlite:` connection string
    /// * `max_connections` - Upper bound for the pool
    pub async fn connect(db_path: &str, max_connections: u32) -> Result<Self, StoreError> {
        let file_path = db_path.strip_prefix("sqlite://").unwrap_or(
            db_path.strip_prefix("sqlite:").unwrap_or(db_path),
        );
        let in_memory = file_path.starts_with(":memory:");

        if !in_memory {
            if let Some(parent) = PathBuf::from(file_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StoreError::Migration(format!("Failed to create db directory: {}", e))
                    })?;
                }
            }
        }

        // SQLite connection string format: sqlite:path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)?.create_if_missing(true);

        // An in-memory database lives only as long as its connection
        let max_connections = if in_memory { 1 } else { max_connections };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", db_path);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_swift_codes.sql");

        // Strip comments and collapse to one line per statement
        let mut cleaned_sql = String::new();
        for line in migration_sql.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("--") {
                continue;
            }
            let without_comments = match trimmed.find("--") {
                Some(comment_pos) => &trimmed[..comment_pos],
                None => trimmed,
            };
            cleaned_sql.push_str(without_comments.trim());
            cleaned_sql.push(' ');
        }

        let statements = cleaned_sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty());

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    StoreError::Migration(format!(
                        "{} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl SwiftCodeStore for SqliteSwiftCodeStore {
    async fn find_by_prefix(&self, prefix: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        // Literal, case-sensitive prefix match (LIKE is neither)
        let records = sqlx::query_as::<_, SwiftCodeRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM swift_codes \
             WHERE substr(swift_code, 1, length(?)) = ? ORDER BY id ASC"
        ))
        .bind(prefix)
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<SwiftCodeRecord>, StoreError> {
        let record = sqlx::query_as::<_, SwiftCodeRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM swift_codes WHERE swift_code = ?"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_country_name(&self, iso2: &str) -> Result<String, StoreError> {
        let name: Option<String> = sqlx::query_scalar(
            "SELECT country_name FROM swift_codes WHERE country_iso2 = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(iso2)
        .fetch_optional(&self.pool)
        .await?;

        Ok(name.unwrap_or_default())
    }

    async fn find_by_country(&self, iso2: &str) -> Result<Vec<SwiftCodeRecord>, StoreError> {
        let records = sqlx::query_as::<_, SwiftCodeRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM swift_codes WHERE country_iso2 = ? ORDER BY id ASC"
        ))
        .bind(iso2)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn insert(&self, record: &SwiftCodeRecord) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "INSERT INTO swift_codes ({RECORD_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(&record.swift_code)
        .bind(&record.country_iso2)
        .bind(&record.country_name)
        .bind(&record.bank_name)
        .bind(&record.address)
        .bind(&record.code_type)
        .bind(&record.town_name)
        .bind(&record.time_zone)
        .execute(&self.pool)
        .await?;

        debug!("Inserted SWIFT code: {}", record.swift_code);
        Ok(())
    }

    async fn delete_by_code(&self, code: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM swift_codes WHERE swift_code = ?")
            .bind(code)
            .execute(&self.pool)
            .await?;

        debug!(
            "Deleted SWIFT code {} ({} rows)",
            code,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
