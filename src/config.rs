use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Machine to run the coverage optimization for; `None` skips the report.
    pub machine: Option<String>,
    pub coverage_target_pct: f64,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    toolscope_database_url: Option<String>,
    #[serde(default)]
    database_url: Option<String>,
    #[serde(default)]
    toolscope_machine: Option<String>,
    #[serde(default = "default_coverage_target")]
    toolscope_coverage_target_pct: f64,
}

const fn default_coverage_target() -> f64 {
    90.0
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let raw: RawConfig =
            envy::from_env().context("failed to parse TOOLSCOPE_* environment variables")?;

        let database_url = raw
            .toolscope_database_url
            .or(raw.database_url)
            .or_else(|| env::var("DATABASE_URL").ok())
            .context("TOOLSCOPE_DATABASE_URL or DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            machine: raw.toolscope_machine,
            coverage_target_pct: raw.toolscope_coverage_target_pct.clamp(0.0, 100.0),
        })
    }
}
