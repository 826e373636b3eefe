// src/graph/rank/pagerank.rs
//! `PageRank` by fixed-point iteration.

use tracing::{debug, info};

use super::graph::{LinkGraph, PageId};
use super::params::{
    check_damping, check_tolerance, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use super::RankMap;
use crate::error::{RankError, Result};

/// Deterministic estimator applying the `PageRank` recurrence until every
/// page moves by less than `tolerance` in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterativeSolver {
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self::new(DEFAULT_DAMPING)
    }
}

impl IterativeSolver {
    #[must_use]
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Upper bound on passes before giving up with `NotConverged`.
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Computes `PageRank` scores for every page in `graph`.
    ///
    /// # Errors
    /// Returns `InvalidDampingFactor`, `InvalidTolerance` or `EmptyGraph` on
    /// bad input, and `NotConverged` if the pass cap is reached first.
    #[allow(clippy::cast_precision_loss)]
    pub fn solve<P: PageId>(&self, graph: &LinkGraph<P>) -> Result<RankMap<P>> {
        check_damping(self.damping)?;
        check_tolerance(self.tolerance)?;
        graph.ensure_non_empty()?;

        let index = graph.index();
        let n = index.len() as f64;
        let inbound = index.inbound();
        let dangling: Vec<usize> = index
            .outbound
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| i)
            .collect();

        let mut ranks = vec![1.0 / n; index.len()];

        for pass in 1..=self.max_iterations {
            let next = iterate_once(
                &ranks,
                &index.outbound,
                &inbound,
                &dangling,
                self.damping,
                n,
            );
            let delta = max_delta(&ranks, &next);
            ranks = next;
            debug!(pass, delta, "pagerank pass");

            if delta < self.tolerance {
                info!(passes = pass, damping = self.damping, "iterated pagerank converged");
                return Ok(index.pages.into_iter().cloned().zip(ranks).collect());
            }
        }

        Err(RankError::NotConverged {
            iterations: self.max_iterations,
        })
    }
}

/// Iterates `PageRank` on `graph` with the default tolerance and pass cap.
///
/// # Errors
/// See [`IterativeSolver::solve`].
pub fn iterate<P: PageId>(graph: &LinkGraph<P>, damping: f64) -> Result<RankMap<P>> {
    IterativeSolver::new(damping).solve(graph)
}

/// One application of the recurrence. Each dangling page spreads its rank
/// over all `n` pages, so its share is added to every page alike.
#[allow(clippy::cast_precision_loss)]
fn iterate_once(
    prev: &[f64],
    outbound: &[Vec<usize>],
    inbound: &[Vec<usize>],
    dangling: &[usize],
    damping: f64,
    n: f64,
) -> Vec<f64> {
    let teleport = (1.0 - damping) / n;
    let dangling_share: f64 = dangling.iter().map(|&i| prev[i] / n).sum();

    inbound
        .iter()
        .map(|sources| {
            let linked: f64 = sources
                .iter()
                .map(|&s| prev[s] / outbound[s].len() as f64)
                .sum();
            teleport + damping * (linked + dangling_share)
        })
        .collect()
}

/// Largest absolute per-page change. Every page must move less than the
/// tolerance, so the maximum decides convergence.
fn max_delta(prev: &[f64], next: &[f64]) -> f64 {
    prev.iter()
        .zip(next)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
