//! Loads a SWIFT code spreadsheet export (CSV) into the database
//!
//! Usage: `import_swift_codes <csv-path> [database-url]`
//! The database URL defaults to `DATABASE_URL` from the environment.

use std::env;
use std::fs::File;
use swift_codes_backend::config::Config;
use swift_codes_backend::services::import_csv;
use swift_codes_backend::store::SqliteSwiftCodeStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let csv_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("Usage: import_swift_codes <csv-path> [database-url]"))?;

    let config = Config::load();
    let database_url = args.next().unwrap_or(config.database.url);

    let store = SqliteSwiftCodeStore::connect(&database_url, config.database.max_connections).await?;
    let file = File::open(&csv_path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", csv_path, e))?;

    info!("Importing {} into {}", csv_path, database_url);
    let summary = import_csv(file, &store).await?;

    println!(
        "Imported {} SWIFT codes ({} invalid rows, {} duplicates skipped)",
        summary.inserted, summary.invalid, summary.duplicates
    );
    Ok(())
}
