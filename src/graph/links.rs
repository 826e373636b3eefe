// src/graph/links.rs
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static ANCHOR_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Extracts the distinct `href` targets of `<a>` tags in `html`.
///
/// Only double-quoted attributes are recognized. Targets are returned
/// verbatim; resolving them against the corpus is the graph builder's job.
#[must_use]
pub fn extract(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
