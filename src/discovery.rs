// src/discovery.rs
//! Corpus discovery: turns a directory of HTML pages into a link graph.

use crate::error::{RankError, Result};
use crate::graph::rank::{GraphEngine, LinkGraph};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const PAGE_EXT: &str = ".html";

/// Reads every `*.html` file directly inside `dir` and links them by their
/// anchor targets.
///
/// Pages are identified by file name. Subdirectories are not visited.
///
/// # Errors
/// Returns `Io` if `dir` is not a readable directory or a page cannot be read.
pub fn crawl(dir: &Path) -> Result<LinkGraph<String>> {
    ensure_directory(dir)?;
    let pages = read_pages(dir)?;
    let graph = GraphEngine::build(&pages);
    info!(
        pages = graph.len(),
        links = graph.link_count(),
        corpus = %dir.display(),
        "crawled corpus"
    );
    Ok(graph)
}

fn ensure_directory(dir: &Path) -> Result<()> {
    let meta = fs::metadata(dir).map_err(|source| RankError::Io {
        source,
        path: dir.to_path_buf(),
    })?;
    if meta.is_dir() {
        return Ok(());
    }
    Err(RankError::Io {
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        path: dir.to_path_buf(),
    })
}

fn read_pages(dir: &Path) -> Result<Vec<(String, String)>> {
    let (paths, error_count) = page_paths(dir);
    if error_count > 0 {
        warn!(error_count, "skipped unreadable directory entries");
    }

    let mut pages = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path).map_err(|source| RankError::Io {
            source,
            path: path.clone(),
        })?;
        let name = page_name(&path);
        debug!(page = %name, bytes = content.len(), "read page");
        pages.push((name, content));
    }
    Ok(pages)
}

fn page_paths(dir: &Path) -> (Vec<PathBuf>, usize) {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_page(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_page(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|f| f.to_string_lossy().ends_with(PAGE_EXT))
}

fn page_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |f| f.to_string_lossy().into_owned())
}
