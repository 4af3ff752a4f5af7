//! Data models for the tool-usage analysis pipeline.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// Sentinel for an absent categorical value.
pub const UNKNOWN: &str = "Unbekannt";

/// Sentinel for an absent holder label.
pub const NONE_MARK: &str = "-";

/// Labels treated as "no intermediate holder" when composing assembly names.
pub const EMPTY_SENTINELS: [&str; 5] = ["-", "None", "", "nan", "Unbekannt"];

/// One tool-usage event joined with its parent job document, exactly as read
/// from the source database. Job-side fields are `None` when the left join
/// found no matching document.
#[derive(Debug, Clone, Queryable)]
pub struct RawUsageRecord {
    pub tool: Option<String>,
    pub cutting_edge: Option<String>,
    pub runtime_seconds: Option<f64>,
    pub diameter: Option<String>,
    pub corner_radius: Option<String>,
    pub clamping_length: Option<String>,
    pub overall_length: Option<String>,
    pub base_holder: Option<String>,
    pub intermediate_holder: Option<String>,
    pub tool_comment: Option<String>,
    pub job_number: Option<String>,
    pub machine: Option<String>,
    pub part: Option<String>,
    pub created_at: Option<String>,
    pub job_comment: Option<String>,
    pub programmer: Option<String>,
}

/// A [`RawUsageRecord`] with numeric fields coerced, the timestamp parsed and
/// every categorical field carrying either a real value or a sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    pub tool: String,
    pub cutting_edge: String,
    pub runtime_seconds: Option<f64>,
    pub diameter: Option<f64>,
    pub corner_radius: Option<f64>,
    pub clamping_length: Option<f64>,
    pub overall_length: Option<f64>,
    pub base_holder: String,
    pub intermediate_holder: String,
    pub tool_comment: String,
    pub job_number: String,
    pub machine: String,
    pub part: String,
    pub created_at: Option<DateTime<Utc>>,
    pub job_comment: String,
    pub programmer: String,
}

/// Final record shape handed to consumers: normalized fields plus the derived
/// analysis columns. Produced once per raw record and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: NormalizedRecord,
    pub runtime_hours: f64,
    pub manufacturer: String,
    pub process: String,
    pub assembly: String,
    pub geometry_key: String,
}

/// One row of a machine's ranked coverage curve.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageRow {
    pub rank: usize,
    pub tool: String,
    pub runtime_hours: f64,
    pub cumulative_pct: f64,
}
