// src/reporting.rs
//! Console output for rank results.
//!
//! Text output lists pages in identifier order with four decimals, or by
//! descending rank when requested. JSON output serializes the whole report.

use crate::graph::rank::queries;
use crate::types::{Estimate, RankReport};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Row ordering for text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    ByPage,
    ByRank,
}

/// Prints the report to stdout.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &RankReport, format: OutputFormat, order: Order) -> Result<()> {
    let out = match format {
        OutputFormat::Text => render_text(report, order),
        OutputFormat::Json => render_json(report)?,
    };
    print!("{out}");
    Ok(())
}

#[must_use]
pub fn render_text(report: &RankReport, order: Order) -> String {
    let mut out = String::new();
    for estimate in &report.estimates {
        write_estimate(&mut out, estimate, order);
    }
    out
}

fn write_estimate(out: &mut String, estimate: &Estimate, order: Order) {
    let _ = writeln!(out, "{}", estimate.title().bold());
    let rows: Vec<(String, f64)> = match order {
        Order::ByPage => estimate.ranks.iter().map(|(p, r)| (p.clone(), *r)).collect(),
        Order::ByRank => queries::ranked(&estimate.ranks),
    };
    for (page, rank) in rows {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
}

/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &RankReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
