//! Tool-usage analytics for machining data: ingests per-tool usage records
//! from a SQLite store, normalizes and classifies them, and computes
//! machine-level coverage optimizations and group-by aggregates for an
//! external renderer.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod coverage;
pub mod db;
pub mod error;
pub mod identity;
pub mod ingest;
pub mod models;
pub mod normalize;
pub mod schema;
pub mod telemetry;

use crate::{config::AppConfig, coverage::machine_coverage, ingest::IngestionPipeline};
use tracing::info;

/// Bootstraps a single analysis pass from environment configuration: ingest,
/// log the headline figures, and emit the coverage report as JSON when a
/// machine is configured.
pub fn run() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = AppConfig::from_env()?;

    let pipeline = IngestionPipeline::new();
    let records = pipeline.load(&config.database_url)?;

    let kpis = aggregate::summary(&records);
    info!(
        records = kpis.record_count,
        tools = kpis.distinct_tools,
        assemblies = kpis.distinct_assemblies,
        total_runtime_hours = kpis.total_runtime_hours,
        "ingestion summary"
    );

    if let Some(machine) = &config.machine {
        let outcome = machine_coverage(&records, machine, config.coverage_target_pct);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for machine in aggregate::machines(&records) {
            info!(machine = %machine, "machine available for coverage analysis");
        }
    }

    Ok(())
}
