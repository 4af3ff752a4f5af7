//! Field-level coercion of the heterogeneous source columns.

use crate::models::{NormalizedRecord, RawUsageRecord, NONE_MARK, UNKNOWN};
use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Coerces a free-form numeric cell ("12,5 mm", "45°", "3.2") to a float.
/// Unparseable input becomes `None`, never an error. Idempotent: feeding a
/// formatted clean value back in yields the same number.
pub fn clean_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw
        .trim()
        .to_lowercase()
        .replace(" mm", "")
        .replace('°', "")
        .replace(',', ".");
    cleaned.trim().parse::<f64>().ok()
}

/// Parses the source's fixed `day.month.year hour:minute` timestamp format.
/// The source carries no offset; naive results are interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
}

/// Normalizes one raw record: numeric and temporal coercion plus sentinel
/// defaulting for categorical text. No raw nulls survive this step.
pub fn normalize(raw: RawUsageRecord) -> NormalizedRecord {
    NormalizedRecord {
        tool: text_or(raw.tool, UNKNOWN),
        cutting_edge: text_or(raw.cutting_edge, UNKNOWN),
        runtime_seconds: raw.runtime_seconds,
        diameter: numeric(raw.diameter),
        corner_radius: numeric(raw.corner_radius),
        clamping_length: numeric(raw.clamping_length),
        overall_length: numeric(raw.overall_length),
        base_holder: text_or(raw.base_holder, NONE_MARK),
        intermediate_holder: text_or(raw.intermediate_holder, NONE_MARK),
        tool_comment: text_or(raw.tool_comment, ""),
        job_number: text_or(raw.job_number, UNKNOWN),
        machine: text_or(raw.machine, UNKNOWN),
        part: text_or(raw.part, UNKNOWN),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        job_comment: text_or(raw.job_comment, ""),
        programmer: text_or(raw.programmer, UNKNOWN),
    }
}

fn numeric(raw: Option<String>) -> Option<f64> {
    raw.as_deref().and_then(clean_numeric)
}

fn text_or(raw: Option<String>, sentinel: &str) -> String {
    raw.unwrap_or_else(|| sentinel.to_string())
}
