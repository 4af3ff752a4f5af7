//! Pareto coverage: the minimal ranked tool set covering a target share of a
//! machine's total runtime.

use crate::models::{CoverageRow, EnrichedRecord};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub machine: String,
    pub target_pct: f64,
    pub total_runtime_hours: f64,
    /// Number of top-ranked tools needed to stay at or under the target
    /// cumulative percentage.
    pub required_count: usize,
    pub rows: Vec<CoverageRow>,
}

/// Outcome of a coverage computation. `NoData` covers both an empty machine
/// filter and a zero total runtime, keeping it distinguishable from a valid
/// report whose `required_count` happens to be 0.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CoverageOutcome {
    Available(CoverageReport),
    NoData { machine: String },
}

/// Computes the ranked cumulative-runtime curve for one machine.
///
/// Tools are grouped by label in ascending lexical order, then stable-sorted
/// by summed runtime descending, so runtime ties keep lexical order. Ranks
/// are 1-based; the cumulative percentage reaches 100 at the last rank.
pub fn machine_coverage(
    records: &[EnrichedRecord],
    machine: &str,
    target_pct: f64,
) -> CoverageOutcome {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.record.machine == machine) {
        *totals.entry(record.record.tool.as_str()).or_insert(0.0) += record.runtime_hours;
    }

    let total: f64 = totals.values().sum();
    if totals.is_empty() || total <= 0.0 {
        return CoverageOutcome::NoData {
            machine: machine.to_string(),
        };
    }

    let mut grouped: Vec<(&str, f64)> = totals.into_iter().collect();
    grouped.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut running = 0.0;
    let rows: Vec<CoverageRow> = grouped
        .into_iter()
        .enumerate()
        .map(|(idx, (tool, runtime_hours))| {
            running += runtime_hours;
            CoverageRow {
                rank: idx + 1,
                tool: tool.to_string(),
                runtime_hours,
                cumulative_pct: 100.0 * running / total,
            }
        })
        .collect();

    // Count = rank of the last row still at or under the target. When even
    // rank 1 exceeds the target this is 0, not 1; returning 1 would also be
    // defensible, but consumers rely on the 0 answer.
    let required_count = rows
        .iter()
        .filter(|row| row.cumulative_pct <= target_pct)
        .next_back()
        .map(|row| row.rank)
        .unwrap_or(0);

    CoverageOutcome::Available(CoverageReport {
        machine: machine.to_string(),
        target_pct,
        total_runtime_hours: total,
        required_count,
        rows,
    })
}
