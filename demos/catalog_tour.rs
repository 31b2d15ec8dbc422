//! Runs the duck, beverage and pizza scenarios once, end to end.
//!
//! Set `RUST_LOG=debug` to see lifecycle tracing alongside the report lines.

use catalog_composer::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> CatalogResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let summary = CatalogOrchestrator::from_config(CatalogConfig::default()).run_all()?;

    println!();
    println!("=== Summary ===");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
