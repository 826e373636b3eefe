// src/graph/rank/params.rs
//! Estimator defaults and precondition checks.

use crate::error::{RankError, Result};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
/// Absolute per-page delta below which the iterative solver stops.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Rejects damping factors outside the open interval (0, 1). NaN is rejected too.
///
/// # Errors
/// Returns `InvalidDampingFactor` carrying the offending value.
pub fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDampingFactor(damping))
    }
}

/// Rejects a convergence tolerance that is not a finite positive number.
///
/// # Errors
/// Returns `InvalidTolerance` carrying the offending value.
pub fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance > 0.0 && tolerance.is_finite() {
        Ok(())
    } else {
        Err(RankError::InvalidTolerance(tolerance))
    }
}

/// # Errors
/// Returns `InvalidSampleCount` when `samples` is zero.
pub fn check_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(RankError::InvalidSampleCount(samples));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damping_bounds_are_exclusive() {
        assert!(check_damping(0.5).is_ok());
        assert!(check_damping(DEFAULT_DAMPING).is_ok());
        assert!(check_damping(0.0).is_err());
        assert!(check_damping(1.0).is_err());
        assert!(check_damping(-0.1).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_tolerance_must_be_finite_and_positive() {
        assert!(check_tolerance(DEFAULT_TOLERANCE).is_ok());
        assert!(check_tolerance(1e-12).is_ok());
        assert!(check_tolerance(0.0).is_err());
        assert!(check_tolerance(-0.001).is_err());
        assert!(check_tolerance(f64::NAN).is_err());
        assert!(check_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(
            check_samples(0),
            Err(RankError::InvalidSampleCount(0))
        ));
        assert!(check_samples(1).is_ok());
    }
}
