// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod pagerank;
pub mod params;
pub mod queries;
pub mod sampler;
pub mod transition;

use std::collections::BTreeMap;

pub use graph::{LinkGraph, PageId};
pub use pagerank::{iterate, IterativeSolver};
pub use sampler::{sample, Sampler};
pub use transition::transition;

/// Page -> rank value. Values are non-negative and sum to 1.
pub type RankMap<P> = BTreeMap<P, f64>;

/// Orchestrates graph construction from page sources.
pub struct GraphEngine;

impl GraphEngine {
    /// Builds a link graph from `(page name, html)` pairs.
    #[must_use]
    pub fn build(pages: &[(String, String)]) -> LinkGraph<String> {
        LinkGraph::from_links(
            pages
                .iter()
                .map(|(name, html)| (name.clone(), crate::graph::links::extract(html))),
        )
    }
}
