//! # Run Statistics
//!
//! Reduces a collection of final fitness values from repeated runs to
//! minimum, mean, and population standard deviation.
//!
//! ```rust
//! use metaopt::stats::SummaryStatistics;
//!
//! let summary = SummaryStatistics::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! assert_eq!(summary.min, 2.0);
//! assert_eq!(summary.mean, 5.0);
//! assert_eq!(summary.std_dev, 2.0);
//! ```

use crate::error::{OptimizationError, Result};
use crate::solution::fitness_order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary of a collection of fitness values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryStatistics {
    /// The best (lowest) fitness in the collection.
    pub min: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The population standard deviation (divides by n, not n−1).
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Summarizes a slice of fitness values.
    ///
    /// The minimum follows the crate's fitness ordering, so a non-finite
    /// value is never reported as the minimum of a sample that contains a
    /// finite one.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizationError::EmptySample`] if `values` is empty.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(OptimizationError::EmptySample);
        }

        let min = values
            .iter()
            .copied()
            .min_by(|a, b| fitness_order(*a, *b))
            .unwrap_or(f64::NAN);

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_of_squares: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
        let std_dev = (sum_of_squares / n).sqrt();

        Ok(Self { min, mean, std_dev })
    }
}
