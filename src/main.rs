//! Salary Statistics Service
//!
//! Serves salary statistics over an in-memory employee store.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use salary_stats::config::ServiceConfig;
use salary_stats::store::{seed_records, EmployeeRepo, InMemoryRepo};
use salary_stats::utils::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_telemetry()?;

    let config = ServiceConfig::from_env()?;
    info!("Seeding employee store from {:?}", config.dataset);

    let records = seed_records(&config.dataset)?;
    let repo: Arc<dyn EmployeeRepo> = Arc::new(InMemoryRepo::with_records(records));

    salary_stats::server::run_server(config, repo).await
}
