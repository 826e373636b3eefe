//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{overrides, Commands, IterateArgs, SampleArgs};
use super::handlers::{handle_rank, Estimators};
use crate::exit::LinkRankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LinkRankExit> {
    match command {
        Commands::Rank {
            corpus,
            common,
            sampling,
            iteration,
            output,
        } => handle_rank(
            &corpus,
            Estimators::Both,
            overrides(common, sampling, iteration),
            output.format,
            output.order(),
        ),
        Commands::Sample {
            corpus,
            common,
            sampling,
            output,
        } => handle_rank(
            &corpus,
            Estimators::SamplingOnly,
            overrides(common, sampling, IterateArgs::default()),
            output.format,
            output.order(),
        ),
        Commands::Iterate {
            corpus,
            common,
            iteration,
            output,
        } => handle_rank(
            &corpus,
            Estimators::IterationOnly,
            overrides(common, SampleArgs::default(), iteration),
            output.format,
            output.order(),
        ),
    }
}
