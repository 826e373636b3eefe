// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, non-convergence).
    Error = 1,
    /// Input validation failed (bad parameter, bad config, empty corpus).
    InvalidInput = 2,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced by a command handler.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(
                RankError::EmptyGraph
                | RankError::InvalidDampingFactor(_)
                | RankError::InvalidSampleCount(_)
                | RankError::InvalidTolerance(_)
                | RankError::InvalidGraph(_)
                | RankError::Config(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
