// src/graph/rank/queries.rs
use super::graph::{LinkGraph, PageId};
use super::RankMap;

/// Returns pages ordered by descending rank. Ties keep identifier order.
#[must_use]
pub fn ranked<P: PageId>(ranks: &RankMap<P>) -> Vec<(P, f64)> {
    let mut ranked: Vec<_> = ranks.iter().map(|(p, r)| (p.clone(), *r)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Adds an explicit zero for every graph page missing from `ranks`.
#[must_use]
pub fn with_missing_pages<P: PageId>(graph: &LinkGraph<P>, ranks: &RankMap<P>) -> RankMap<P> {
    graph
        .pages()
        .map(|p| (p.clone(), ranks.get(p).copied().unwrap_or(0.0)))
        .collect()
}

