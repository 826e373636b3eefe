// tests/integration_crawl.rs
//! End-to-end: directory of pages -> graph -> both estimators -> report.

use linkrank_core::cli::handlers::{build_report, Estimators};
use linkrank_core::config::RankConfig;
use linkrank_core::discovery;
use linkrank_core::reporting::{self, Order};
use linkrank_core::types::Method;
use linkrank_core::RankError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn corpus() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    let write = |name: &str, body: &str| fs::write(d.path().join(name), body).unwrap();
    write(
        "1.html",
        r#"<html><body>
<a href="2.html">Two</a>
<a href="1.html">Self</a>
<a href="https://example.com/">External</a>
</body></html>"#,
    );
    write("2.html", r#"<a href="1.html">One</a> <a href="3.html">Three</a>"#);
    write("3.html", r#"<a href="2.html">Two</a> <a href="4.html">Nested</a>"#);
    write("notes.txt", r#"<a href="1.html">not a page</a>"#);
    fs::create_dir(d.path().join("sub")).unwrap();
    fs::write(d.path().join("sub/4.html"), r#"<a href="1.html">x</a>"#).unwrap();
    d
}

fn seeded() -> RankConfig {
    RankConfig {
        samples: 2_000,
        seed: Some(11),
        ..RankConfig::default()
    }
}

#[test]
fn test_crawl_builds_closed_graph() {
    let d = corpus();
    let graph = discovery::crawl(d.path()).unwrap();
    let pages: Vec<_> = graph.pages().cloned().collect();
    assert_eq!(pages, vec!["1.html", "2.html", "3.html"]);

    let one = graph.outbound(&"1.html".to_string()).unwrap();
    assert_eq!(one.len(), 1, "self and external links dropped");
    assert!(one.contains("2.html"));

    let three = graph.outbound(&"3.html".to_string()).unwrap();
    assert_eq!(three.len(), 1, "link into subdirectory dropped");
}

#[test]
fn test_crawl_missing_directory() {
    let d = tempfile::tempdir().unwrap();
    let err = discovery::crawl(&d.path().join("nope")).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
}

#[test]
fn test_crawl_file_is_not_corpus() {
    let d = corpus();
    let err = discovery::crawl(&d.path().join("1.html")).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
}

#[test]
fn test_report_runs_both_estimators() {
    let d = corpus();
    let report = build_report(d.path(), Estimators::Both, &seeded()).unwrap();
    assert_eq!(report.pages, 3);
    assert_eq!(report.estimates.len(), 2);
    assert_eq!(report.estimates[0].method, Method::Sampling);
    assert_eq!(report.estimates[1].method, Method::Iteration);

    for estimate in &report.estimates {
        assert_eq!(estimate.ranks.len(), 3);
        let total: f64 = estimate.ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-3);
    }
}

#[test]
fn test_seeded_report_is_reproducible() {
    let d = corpus();
    let a = build_report(d.path(), Estimators::SamplingOnly, &seeded()).unwrap();
    let b = build_report(d.path(), Estimators::SamplingOnly, &seeded()).unwrap();
    assert_eq!(a.estimates[0].ranks, b.estimates[0].ranks);
}

#[test]
fn test_unseeded_report_lists_every_page() {
    let d = corpus();
    let rank = RankConfig {
        samples: 500,
        ..RankConfig::default()
    };
    let report = build_report(d.path(), Estimators::SamplingOnly, &rank).unwrap();
    let ranks = &report.estimates[0].ranks;
    assert_eq!(ranks.len(), 3);
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_text_report_layout() {
    colored::control::set_override(false);
    let d = corpus();
    let report = build_report(d.path(), Estimators::Both, &seeded()).unwrap();
    let text = reporting::render_text(&report, Order::ByPage);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "PageRank Results from Sampling (n = 2000)");
    assert!(lines[1].starts_with("  1.html: "));
    assert!(lines[2].starts_with("  2.html: "));
    assert!(lines[3].starts_with("  3.html: "));
    assert_eq!(lines[4], "PageRank Results from Iteration");
    let value = lines[5].trim_start_matches("  1.html: ");
    assert_eq!(value.split('.').nth(1).map(str::len), Some(4));
}

#[test]
fn test_text_report_by_rank() {
    colored::control::set_override(false);
    let d = corpus();
    let report = build_report(d.path(), Estimators::IterationOnly, &seeded()).unwrap();
    let text = reporting::render_text(&report, Order::ByRank);
    // 2.html is linked from both other pages.
    assert!(text.lines().nth(1).is_some_and(|l| l.starts_with("  2.html")));
}

#[test]
fn test_json_report() {
    let d = corpus();
    let report = build_report(d.path(), Estimators::Both, &seeded()).unwrap();
    let json = reporting::render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pages"], 3);
    assert_eq!(value["estimates"][0]["method"], "sampling");
    assert_eq!(value["estimates"][0]["samples"], 2000);
    assert_eq!(value["estimates"][1]["method"], "iteration");
    assert!(value["estimates"][1].get("samples").is_none());
}

#[test]
fn test_empty_corpus_is_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("readme.md"), "nothing here").unwrap();
    let err = build_report(d.path(), Estimators::Both, &seeded()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RankError>(),
        Some(RankError::EmptyGraph)
    ));
}

#[test]
fn test_unreadable_corpus_path_reported() {
    let err = build_report(Path::new("/definitely/not/here"), Estimators::Both, &seeded())
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to crawl"));
}
