// src/graph/rank/sampler.rs
//! Monte-Carlo `PageRank` estimation by random walk.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::graph::{LinkGraph, PageId};
use super::params::{check_damping, check_samples, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use super::transition::fill_weights;
use super::RankMap;
use crate::error::Result;

/// Random-surfer estimator with an owned random source.
pub struct Sampler<R> {
    rng: R,
    damping: f64,
    samples: usize,
}

impl Sampler<StdRng> {
    /// Reproducible sampler.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }

    #[must_use]
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Walks `graph` and returns visit frequencies.
    ///
    /// # Errors
    /// See [`sample`].
    pub fn run<P: PageId>(&mut self, graph: &LinkGraph<P>) -> Result<RankMap<P>> {
        sample(graph, self.damping, self.samples, &mut self.rng)
    }
}

/// Estimates `PageRank` by drawing `samples` pages from a random walk.
///
/// The first page is uniform; each following page is a weighted draw from the
/// transition model of the previous one. Values are visit counts divided by
/// `samples`. Pages never visited are absent from the result.
///
/// # Errors
/// Returns `InvalidSampleCount`, `InvalidDampingFactor` or `EmptyGraph`
/// before drawing anything.
#[allow(clippy::cast_precision_loss)]
pub fn sample<P, R>(
    graph: &LinkGraph<P>,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankMap<P>>
where
    P: PageId,
    R: Rng,
{
    check_samples(samples)?;
    check_damping(damping)?;
    graph.ensure_non_empty()?;

    let index = graph.index();
    let n = index.len();
    let mut visits = vec![0usize; n];
    let mut weights = Vec::with_capacity(n);

    let mut current = rng.gen_range(0..n);
    visits[current] += 1;

    for _ in 1..samples {
        fill_weights(n, &index.outbound[current], damping, &mut weights);
        current = WeightedIndex::new(&weights)?.sample(rng);
        visits[current] += 1;
    }

    let total = samples as f64;
    let ranks: RankMap<P> = index
        .pages
        .into_iter()
        .zip(visits)
        .filter(|(_, count)| *count > 0)
        .map(|(page, count)| (page.clone(), count as f64 / total))
        .collect();

    debug!(visited = ranks.len(), pages = n, "random walk finished");
    info!(samples, damping, "sampled pagerank");
    Ok(ranks)
}
