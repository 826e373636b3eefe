// tests/unit_iterate.rs
//! Tests for the fixed-point estimator.

use linkrank_core::{iterate, IterativeSolver, LinkGraph, RankError};

fn with_dangling() -> LinkGraph<&'static str> {
    LinkGraph::from_links([("A", vec!["B", "C"]), ("B", vec!["A"]), ("C", vec![])])
}

#[test]
fn test_two_cycle_converges_to_half() {
    let graph = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
    let ranks = iterate(&graph, 0.85).unwrap();
    assert!((ranks[&"A"] - 0.5).abs() < 1e-9);
    assert!((ranks[&"B"] - 0.5).abs() < 1e-9);
}

#[test]
fn test_dangling_page_keeps_rank() {
    let ranks = iterate(&with_dangling(), 0.85).unwrap();
    let total: f64 = ranks.values().sum();
    assert!(ranks[&"C"] > 0.0);
    assert!((total - 1.0).abs() < 1e-3);
    assert!(ranks[&"A"] > ranks[&"B"]);
    assert!((ranks[&"B"] - ranks[&"C"]).abs() < 1e-12);
}

#[test]
fn test_tight_tolerance_reaches_fixed_point() {
    // Closed form: B = C = 0.475 / (1.85 - 0.85 / 3), A = 1 - 2B.
    let ranks = IterativeSolver::new(0.85)
        .tolerance(1e-12)
        .solve(&with_dangling())
        .unwrap();
    assert!((ranks[&"A"] - 0.393_617_02).abs() < 1e-6);
    assert!((ranks[&"B"] - 0.303_191_49).abs() < 1e-6);
}

#[test]
fn test_single_page_gets_everything() {
    let graph = LinkGraph::from_links([("A", Vec::<&str>::new())]);
    let ranks = iterate(&graph, 0.85).unwrap();
    assert_eq!(ranks.len(), 1);
    assert!((ranks[&"A"] - 1.0).abs() < 1e-12);
}

#[test]
fn test_deterministic() {
    let graph = with_dangling();
    assert_eq!(iterate(&graph, 0.85).unwrap(), iterate(&graph, 0.85).unwrap());
}

#[test]
fn test_larger_graph_sums_to_one() {
    let graph = LinkGraph::from_links([
        (1u32, vec![2, 3, 4]),
        (2, vec![1]),
        (3, vec![5]),
        (4, vec![]),
        (5, vec![6, 1]),
        (6, vec![]),
    ]);
    let ranks = iterate(&graph, 0.85).unwrap();
    assert_eq!(ranks.len(), 6);
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-3);
    assert!(ranks.values().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_iteration_cap() {
    let result = IterativeSolver::new(0.85)
        .max_iterations(1)
        .solve(&with_dangling());
    assert!(matches!(
        result,
        Err(RankError::NotConverged { iterations: 1 })
    ));
}

#[test]
fn test_empty_graph_rejected() {
    let graph: LinkGraph<&str> = LinkGraph::from_links(Vec::<(&str, Vec<&str>)>::new());
    assert!(matches!(iterate(&graph, 0.85), Err(RankError::EmptyGraph)));
}

#[test]
fn test_invalid_damping_rejected() {
    assert!(matches!(
        iterate(&with_dangling(), 0.0),
        Err(RankError::InvalidDampingFactor(_))
    ));
}

#[test]
fn test_bad_tolerance_rejected_before_iterating() {
    let graph = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
    for tolerance in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let result = IterativeSolver::new(0.85)
            .tolerance(tolerance)
            .max_iterations(usize::MAX)
            .solve(&graph);
        assert!(
            matches!(result, Err(RankError::InvalidTolerance(_))),
            "tolerance {tolerance} accepted"
        );
    }
}
