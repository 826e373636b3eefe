use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RankOverrides;
use crate::reporting::{Order, OutputFormat};

#[derive(Parser)]
#[command(
    name = "linkrank",
    version,
    about = "Estimate PageRank over a directory of HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Write a default linkrank.toml into the current directory
    #[arg(long)]
    pub init: bool,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both estimators and print their results
    Rank {
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        sampling: SampleArgs,
        #[command(flatten)]
        iteration: IterateArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Estimate by random-surfer sampling
    Sample {
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        sampling: SampleArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Estimate by fixed-point iteration
    Iterate {
        #[arg(value_name = "CORPUS")]
        corpus: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        iteration: IterateArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CommonArgs {
    /// Probability of following a link instead of jumping to a random page
    #[arg(long, short)]
    pub damping: Option<f64>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SampleArgs {
    /// Number of pages drawn by the random surfer
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Seed for a reproducible walk
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct IterateArgs {
    /// Largest per-page change accepted as converged
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Give up after this many passes
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Order rows by descending rank instead of page name
    #[arg(long)]
    pub by_rank: bool,
}

impl OutputArgs {
    #[must_use]
    pub fn order(self) -> Order {
        if self.by_rank {
            Order::ByRank
        } else {
            Order::ByPage
        }
    }
}

/// Folds the per-command flags into config overrides.
#[must_use]
pub fn overrides(
    common: CommonArgs,
    sampling: SampleArgs,
    iteration: IterateArgs,
) -> RankOverrides {
    RankOverrides {
        damping: common.damping,
        samples: sampling.samples,
        tolerance: iteration.tolerance,
        max_iterations: iteration.max_iterations,
        seed: sampling.seed,
    }
}
