//! Read-only group-by aggregations over the enriched record set.
//!
//! All sums are runtime hours, sorted descending with lexical tie order
//! (groups are collected in ascending key order, then stable-sorted).

use crate::models::EnrichedRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Headline figures for the whole (or a filtered) record set.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryKpis {
    pub total_runtime_hours: f64,
    pub record_count: usize,
    pub distinct_tools: usize,
    pub distinct_assemblies: usize,
}

pub fn summary(records: &[EnrichedRecord]) -> SummaryKpis {
    let tools: BTreeSet<&str> = records.iter().map(|r| r.record.tool.as_str()).collect();
    let assemblies: BTreeSet<&str> = records.iter().map(|r| r.assembly.as_str()).collect();
    SummaryKpis {
        total_runtime_hours: records.iter().map(|r| r.runtime_hours).sum(),
        record_count: records.len(),
        distinct_tools: tools.len(),
        distinct_assemblies: assemblies.len(),
    }
}

/// Sums runtime hours per key, descending.
pub fn runtime_hours_by<'a, F>(records: &'a [EnrichedRecord], key: F) -> Vec<(String, f64)>
where
    F: Fn(&'a EnrichedRecord) -> &'a str,
{
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(key(record)).or_insert(0.0) += record.runtime_hours;
    }
    let mut grouped: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    grouped.sort_by(|a, b| b.1.total_cmp(&a.1));
    grouped
}

pub fn runtime_by_tool(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.record.tool.as_str())
}

pub fn runtime_by_manufacturer(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.manufacturer.as_str())
}

pub fn runtime_by_geometry(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.geometry_key.as_str())
}

pub fn runtime_by_assembly(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.assembly.as_str())
}

pub fn runtime_by_process(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.process.as_str())
}

pub fn runtime_by_programmer(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.record.programmer.as_str())
}

pub fn runtime_by_part(records: &[EnrichedRecord]) -> Vec<(String, f64)> {
    runtime_hours_by(records, |r| r.record.part.as_str())
}

/// Usage counts per tool label, descending, for the count-based top list.
pub fn usage_count_by_tool(records: &[EnrichedRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.record.tool.as_str()).or_insert(0) += 1;
    }
    let mut grouped: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1));
    grouped
}

/// Distinct machine labels, ascending, for consumer machine pickers.
pub fn machines(records: &[EnrichedRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.record.machine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
