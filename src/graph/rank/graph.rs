// src/graph/rank/graph.rs
//! The link graph structure and query interface.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{RankError, Result};

/// Bound shared by every page identifier: cloneable, totally ordered, hashable.
pub trait PageId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> PageId for T {}

/// Immutable page -> outbound links view.
///
/// The graph is closed over its own keys and holds no self links. A page with
/// an empty outbound set is dangling, which is a valid state. Pages are kept
/// in identifier order so every traversal is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph<P: PageId> {
    pub(crate) links: BTreeMap<P, BTreeSet<P>>,
}

impl<P: PageId> LinkGraph<P> {
    /// Builds a graph from raw `(page, targets)` pairs.
    ///
    /// Self links and links to pages that are not keys are dropped. Repeated
    /// keys have their targets merged.
    #[must_use]
    pub fn from_links<I, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        super::builder::close(raw)
    }

    /// Adopts an already-validated map.
    ///
    /// # Errors
    /// Returns `InvalidGraph` if a page links to itself or to a page that is
    /// not a key.
    pub fn try_from_map(links: BTreeMap<P, BTreeSet<P>>) -> Result<Self> {
        super::builder::check_closed(&links)?;
        Ok(Self { links })
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over pages in identifier order.
    pub fn pages(&self) -> impl Iterator<Item = &P> {
        self.links.keys()
    }

    /// Returns the outbound set of `page`, or `None` if it is not in the graph.
    #[must_use]
    pub fn outbound(&self, page: &P) -> Option<&BTreeSet<P>> {
        self.links.get(page)
    }

    #[must_use]
    pub fn contains(&self, page: &P) -> bool {
        self.links.contains_key(page)
    }

    /// Returns true if `page` is in the graph and links nowhere.
    #[must_use]
    pub fn is_dangling(&self, page: &P) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Pages with no outbound links, in identifier order.
    pub fn dangling_pages(&self) -> impl Iterator<Item = &P> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    /// Total number of links across all pages.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        Ok(())
    }

    /// Positional view used by the estimators' inner loops.
    pub(crate) fn index(&self) -> PageIndex<'_, P> {
        let pages: Vec<&P> = self.links.keys().collect();
        let outbound: Vec<Vec<usize>> = self
            .links
            .values()
            .map(|targets| {
                targets
                    .iter()
                    .filter_map(|t| pages.binary_search(&t).ok())
                    .collect()
            })
            .collect();
        PageIndex { pages, outbound }
    }
}

/// Pages addressed by position. `outbound[i]` holds positions of the pages
/// that `pages[i]` links to.
pub(crate) struct PageIndex<'g, P> {
    pub pages: Vec<&'g P>,
    pub outbound: Vec<Vec<usize>>,
}

impl<'g, P: Ord> PageIndex<'g, P> {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn position(&self, page: &P) -> Option<usize> {
        self.pages.binary_search(&page).ok()
    }

    /// Positions of pages linking to each page.
    pub fn inbound(&self) -> Vec<Vec<usize>> {
        let mut inbound = vec![Vec::new(); self.len()];
        for (source, targets) in self.outbound.iter().enumerate() {
            for &target in targets {
                inbound[target].push(source);
            }
        }
        inbound
    }
}
