//! Admin job: run the matching pipeline against the live database.
//!
//! `run_matching report` prints the scored report as JSON without writing
//! anything; `run_matching migrate` applies pending migrations; plain
//! `run_matching` commits every assignment it can.

use anyhow::{Context, Result};
use matching_core::config::Config;
use matching_core::domains::matching::actions::{display_matches, perform_bulk_matching};
use matching_core::domains::matching::PgMatchingStore;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let store = PgMatchingStore::new(pool.clone());

    match std::env::args().nth(1).as_deref() {
        Some("report") => {
            let report = display_matches(&store)
                .await
                .context("Failed to compute match report")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some("migrate") => {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations applied");
        }
        _ => {
            let summary = perform_bulk_matching(&store)
                .await
                .context("Bulk matching failed")?;
            println!("{}", summary.detail);
        }
    }

    Ok(())
}
