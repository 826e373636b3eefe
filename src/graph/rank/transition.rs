// src/graph/rank/transition.rs
//! Random-surfer transition model.

use super::graph::{LinkGraph, PageId};
use super::params::check_damping;
use super::RankMap;
use crate::error::Result;

/// Returns the distribution over the next page to visit from `current`.
///
/// With probability `damping` the surfer follows one of `current`'s links
/// uniformly; otherwise it jumps to any page uniformly. A page with no links,
/// or one missing from the graph, yields exactly `1/N` for every page with no
/// damping applied. The iterative solver writes the dangling case as a damped
/// teleport instead.
///
/// # Errors
/// Returns `EmptyGraph` or `InvalidDampingFactor` on bad input.
pub fn transition<P: PageId>(
    graph: &LinkGraph<P>,
    current: &P,
    damping: f64,
) -> Result<RankMap<P>> {
    graph.ensure_non_empty()?;
    check_damping(damping)?;

    let index = graph.index();
    let linked = index
        .position(current)
        .map_or(&[][..], |i| index.outbound[i].as_slice());

    let mut weights = Vec::with_capacity(index.len());
    fill_weights(index.len(), linked, damping, &mut weights);

    Ok(index
        .pages
        .into_iter()
        .cloned()
        .zip(weights)
        .collect())
}

/// Writes the transition weights for a page whose links sit at positions
/// `linked` into `out`, one slot per page.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fill_weights(n: usize, linked: &[usize], damping: f64, out: &mut Vec<f64>) {
    out.clear();
    let total = n as f64;

    if linked.is_empty() {
        out.resize(n, 1.0 / total);
        return;
    }

    let base = (1.0 - damping) / total;
    let bonus = damping / linked.len() as f64;
    out.resize(n, base);
    for &target in linked {
        out[target] += bonus;
    }
}
