// src/cli/handlers.rs
//! Command handlers: crawl, estimate, report.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::config::{Config, RankConfig, RankOverrides, CONFIG_FILE};
use crate::discovery;
use crate::exit::LinkRankExit;
use crate::graph::rank::{queries, IterativeSolver, LinkGraph, Sampler};
use crate::reporting::{self, Order, OutputFormat};
use crate::types::{Estimate, RankReport};

/// Which estimators a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimators {
    Both,
    SamplingOnly,
    IterationOnly,
}

/// Loads config, crawls `corpus`, runs the requested estimators, prints.
///
/// # Errors
/// Returns error if config is invalid, the corpus cannot be read, or an
/// estimator fails.
pub fn handle_rank(
    corpus: &Path,
    estimators: Estimators,
    overrides: RankOverrides,
    format: OutputFormat,
    order: Order,
) -> Result<LinkRankExit> {
    let config = resolve_config(overrides)?;
    let report = build_report(corpus, estimators, &config.rank)?;
    reporting::print_report(&report, format, order)?;
    Ok(LinkRankExit::Success)
}

/// Writes a default config file unless one exists.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init() -> Result<LinkRankExit> {
    if Config::init()? {
        println!("{}", format!("Created {CONFIG_FILE}").green());
    } else {
        println!("{}", format!("{CONFIG_FILE} already exists.").yellow());
    }
    Ok(LinkRankExit::Success)
}

fn resolve_config(overrides: RankOverrides) -> Result<Config> {
    let mut config = Config::load().context("failed to load config")?;
    config.apply(overrides);
    config.validate()?;
    debug!(rank = ?config.rank, "resolved rank config");
    Ok(config)
}

/// Crawls `corpus` and runs the requested estimators over it.
///
/// # Errors
/// Returns error if the corpus cannot be read or an estimator fails.
pub fn build_report(
    corpus: &Path,
    estimators: Estimators,
    rank: &RankConfig,
) -> Result<RankReport> {
    let graph = discovery::crawl(corpus)
        .with_context(|| format!("failed to crawl {}", corpus.display()))?;

    let estimates = match estimators {
        Estimators::Both => {
            let (sampled, iterated) =
                rayon::join(|| run_sampler(&graph, rank), || run_solver(&graph, rank));
            vec![sampled?, iterated?]
        }
        Estimators::SamplingOnly => vec![run_sampler(&graph, rank)?],
        Estimators::IterationOnly => vec![run_solver(&graph, rank)?],
    };

    Ok(RankReport {
        corpus: corpus.display().to_string(),
        pages: graph.len(),
        estimates,
    })
}

fn run_sampler(graph: &LinkGraph<String>, rank: &RankConfig) -> Result<Estimate> {
    let ranks = rank
        .seed
        .map_or_else(Sampler::from_entropy, Sampler::with_seed)
        .damping(rank.damping)
        .samples(rank.samples)
        .run(graph)?;
    Ok(Estimate::sampled(
        rank.samples,
        rank.damping,
        queries::with_missing_pages(graph, &ranks),
    ))
}

fn run_solver(graph: &LinkGraph<String>, rank: &RankConfig) -> Result<Estimate> {
    let ranks = IterativeSolver::new(rank.damping)
        .tolerance(rank.tolerance)
        .max_iterations(rank.max_iterations)
        .solve(graph)?;
    Ok(Estimate::iterated(rank.damping, ranks))
}
