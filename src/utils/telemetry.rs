//! Logging Setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_FILTER: &str = "salary_stats=info,tower_http=info";

pub fn init_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_line_number(true))
        .try_init()?;

    Ok(())
}
