mod support;

use pretty_assertions::assert_eq;
use std::sync::Arc;
use support::{empty_db, malformed_db, seeded_db};
use toolscope::aggregate;
use toolscope::coverage::{machine_coverage, CoverageOutcome};
use toolscope::error::AnalysisError;
use toolscope::ingest::IngestionPipeline;

#[test]
fn ingests_and_enriches_the_seeded_fixture() {
    let db = seeded_db();
    let pipeline = IngestionPipeline::new();
    let records = pipeline.load(&db.url).expect("ingestion should succeed");

    assert_eq!(records.len(), 5);

    let t_a = records
        .iter()
        .find(|r| r.record.tool == "T-A")
        .expect("T-A should be present");
    assert_eq!(t_a.manufacturer, "Sandvik");
    assert_eq!(t_a.process, "Schruppen");
    assert_eq!(t_a.assembly, "Sandvik CoroMill 390 + HSK63");
    assert_eq!(t_a.geometry_key, "D12.5 R0.5");
    assert_eq!(t_a.runtime_hours, 50.0);
    assert_eq!(t_a.record.diameter, Some(12.5));
    assert_eq!(t_a.record.overall_length, Some(100.0));
    assert_eq!(t_a.record.machine, "DMU-50");
    assert_eq!(
        t_a.record.created_at.map(|dt| dt.to_rfc3339()),
        Some("2024-03-05T14:30:00+00:00".to_string())
    );

    let t_b = records.iter().find(|r| r.record.tool == "T-B").unwrap();
    assert_eq!(t_b.manufacturer, "Fraisa");
    assert_eq!(t_b.process, "Schlichten");
    assert_eq!(t_b.assembly, "Fraisa NX + VERL-120 + HSK63");

    let t_c = records.iter().find(|r| r.record.tool == "T-C").unwrap();
    assert_eq!(t_c.manufacturer, "Sonstige");
    assert_eq!(t_c.process, "Fasen");
}

#[test]
fn orphan_rows_survive_the_join_with_sentinels() {
    let db = seeded_db();
    let pipeline = IngestionPipeline::new();
    let records = pipeline.load(&db.url).unwrap();

    let orphan = records
        .iter()
        .find(|r| r.record.tool == "T-ORPHAN")
        .expect("the row without a document match must be retained");
    assert_eq!(orphan.record.machine, "Unbekannt");
    assert_eq!(orphan.record.job_number, "Unbekannt");
    assert_eq!(orphan.record.part, "Unbekannt");
    assert_eq!(orphan.record.programmer, "Unbekannt");
    assert_eq!(orphan.record.job_comment, "");
    assert_eq!(orphan.record.base_holder, "-");
    assert_eq!(orphan.record.created_at, None);
    assert_eq!(orphan.manufacturer, "Renishaw");
    assert_eq!(orphan.process, "Messen");
    assert_eq!(orphan.assembly, "Messtaster Renishaw + -");
}

#[test]
fn repeated_loads_of_one_source_hit_the_cache() {
    let db = seeded_db();
    let pipeline = IngestionPipeline::new();

    let first = pipeline.load(&db.url).unwrap();
    let second = pipeline.load(&db.url).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn a_new_source_replaces_the_cache_slot() {
    let first_db = seeded_db();
    let second_db = empty_db();
    let pipeline = IngestionPipeline::new();

    let first = pipeline.load(&first_db.url).unwrap();
    let other = pipeline.load(&second_db.url).unwrap();
    assert_eq!(other.len(), 0);
    assert!(!Arc::ptr_eq(&first, &other));

    // The single slot now holds the empty source; the original re-reads.
    let reread = pipeline.load(&first_db.url).unwrap();
    assert_eq!(reread.len(), first.len());
    assert!(!Arc::ptr_eq(&first, &reread));
}

#[test]
fn coverage_over_the_fixture_machine() {
    let db = seeded_db();
    let pipeline = IngestionPipeline::new();
    let records = pipeline.load(&db.url).unwrap();

    let CoverageOutcome::Available(report) = machine_coverage(&records, "DMU-50", 80.0) else {
        panic!("expected a coverage report for DMU-50");
    };
    assert_eq!(report.total_runtime_hours, 100.0);
    let order: Vec<&str> = report.rows.iter().map(|r| r.tool.as_str()).collect();
    assert_eq!(order, ["T-A", "T-B", "T-C"]);
    assert_eq!(report.required_count, 2);

    assert!(matches!(
        machine_coverage(&records, "MAZAK-500", 80.0),
        CoverageOutcome::NoData { .. }
    ));
}

#[test]
fn aggregates_runtime_by_manufacturer() {
    let db = seeded_db();
    let pipeline = IngestionPipeline::new();
    let records = pipeline.load(&db.url).unwrap();

    let by_manufacturer = aggregate::runtime_by_manufacturer(&records);
    assert_eq!(by_manufacturer[0], ("Sandvik".to_string(), 50.0));
    assert_eq!(by_manufacturer[1], ("Fraisa".to_string(), 30.0));
    assert_eq!(by_manufacturer[2], ("Sonstige".to_string(), 20.0));

    assert_eq!(
        aggregate::machines(&records),
        vec![
            "DMU-50".to_string(),
            "HERMLE-C32".to_string(),
            "Unbekannt".to_string()
        ]
    );

    let kpis = aggregate::summary(&records);
    assert_eq!(kpis.record_count, 5);
    assert_eq!(kpis.distinct_tools, 5);
    assert_eq!(kpis.total_runtime_hours, 103.0);
}

#[test]
fn unreadable_source_is_a_single_fatal_error() {
    let pipeline = IngestionPipeline::new();
    let err = pipeline
        .load("/nonexistent-dir/tools.db")
        .expect_err("a missing source directory must fail the ingestion");
    assert!(matches!(err, AnalysisError::Connection { .. }));
}

#[test]
fn missing_tables_fail_the_bulk_read() {
    let db = malformed_db();
    let pipeline = IngestionPipeline::new();
    let err = pipeline
        .load(&db.url)
        .expect_err("a database without the source tables must fail");
    assert!(matches!(err, AnalysisError::SourceRead(_)));
}
