// src/graph/rank/builder.rs
//! Graph construction logic: closing raw link lists over the known pages.

use std::collections::{BTreeMap, BTreeSet};

use super::graph::{LinkGraph, PageId};
use crate::error::{RankError, Result};

/// Merges raw link lists, then drops self links and links that leave the
/// page set.
pub(crate) fn close<P, I, L>(raw: I) -> LinkGraph<P>
where
    P: PageId,
    I: IntoIterator<Item = (P, L)>,
    L: IntoIterator<Item = P>,
{
    let mut links = collect_raw(raw);
    let known: BTreeSet<P> = links.keys().cloned().collect();

    for (page, targets) in &mut links {
        targets.retain(|t| t != page && known.contains(t));
    }

    LinkGraph { links }
}

fn collect_raw<P, I, L>(raw: I) -> BTreeMap<P, BTreeSet<P>>
where
    P: PageId,
    I: IntoIterator<Item = (P, L)>,
    L: IntoIterator<Item = P>,
{
    let mut links: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
    for (page, targets) in raw {
        links.entry(page).or_default().extend(targets);
    }
    links
}

/// Checks the closure and no-self-link invariants without repairing them.
pub(crate) fn check_closed<P: PageId>(links: &BTreeMap<P, BTreeSet<P>>) -> Result<()> {
    for (page, targets) in links {
        if targets.contains(page) {
            return Err(RankError::InvalidGraph(format!("{page:?} links to itself")));
        }
        if let Some(missing) = targets.iter().find(|t| !links.contains_key(*t)) {
            return Err(RankError::InvalidGraph(format!(
                "{page:?} links to {missing:?}, which is not in the graph"
            )));
        }
    }
    Ok(())
}
