//! # Problem
//!
//! The problem capability consumed by every search algorithm: an objective
//! function, its box [`Bounds`], an evaluation budget, and the evaluation
//! counter.
//!
//! The objective itself is a pure function of a coordinate vector; the
//! counter increment is the only side effect and it is performed by the
//! [`Problem`] wrapper, never by the objective. Budget enforcement is the
//! *algorithm's* responsibility: the problem never refuses an evaluation once
//! the budget is exceeded, which lets population methods finish an
//! indivisible generation with a brief overshoot.
//!
//! A `Problem` is created once per run and never reused across independent
//! runs; residual counter state would corrupt budget accounting.
//!
//! ## Example
//!
//! ```rust
//! use metaopt::problem::{Bounds, Problem};
//! use metaopt::rng::RandomNumberGenerator;
//!
//! let bounds = Bounds::symmetric(2, 5.0).unwrap();
//! let mut problem = Problem::new(
//!     "sum of squares",
//!     |x: &[f64]| -> f64 { x.iter().map(|v| v * v).sum() },
//!     bounds,
//!     100,
//! )
//! .unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let solution = problem.sample_random(&mut rng);
//! assert_eq!(problem.evaluations_used(), 1);
//! assert!(problem.bounds().contains(solution.position()));
//! ```

use crate::error::{OptimizationError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::Solution;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pure scalar objective over a real coordinate vector. Lower is better.
///
/// Implementations must be deterministic for identical input and must not
/// carry externally visible state; evaluation counting belongs to
/// [`Problem`].
pub trait Objective: Send + Sync {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn value(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Per-dimension lower and upper limits of the search space.
///
/// Immutable once constructed; validated at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from explicit per-dimension limit vectors.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the vectors are empty, their
    /// lengths differ, any limit is non-finite, or `lower[i] > upper[i]` for
    /// some dimension.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() {
            return Err(OptimizationError::Configuration(
                "Bounds must have at least one dimension".to_string(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(OptimizationError::Configuration(format!(
                "Bound vector lengths differ: lower has {}, upper has {}",
                lower.len(),
                upper.len()
            )));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(OptimizationError::Configuration(format!(
                    "Bounds for dimension {i} must be finite, got [{lo}, {hi}]"
                )));
            }
            if lo > hi {
                return Err(OptimizationError::Configuration(format!(
                    "Lower bound {lo} exceeds upper bound {hi} in dimension {i}"
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Creates bounds of `[-half_range, half_range]` in every dimension.
    pub fn symmetric(dimension: usize, half_range: f64) -> Result<Self> {
        Self::repeated(dimension, -half_range, half_range)
    }

    /// Creates bounds of `[lower, upper]` in every dimension.
    pub fn repeated(dimension: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower; dimension], vec![upper; dimension])
    }

    /// The number of dimensions.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// The per-dimension lower limits.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// The per-dimension upper limits.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Clamps a single coordinate into the limits of dimension `d`.
    pub fn clamp_coordinate(&self, d: usize, value: f64) -> f64 {
        value.clamp(self.lower[d], self.upper[d])
    }

    /// Clamps every coordinate of `x` into its dimension's limits.
    pub fn clamp(&self, x: &mut [f64]) {
        for (d, value) in x.iter_mut().enumerate() {
            *value = value.clamp(self.lower[d], self.upper[d]);
        }
    }

    /// Returns `true` if every coordinate of `x` lies within its limits.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension()
            && x.iter()
                .enumerate()
                .all(|(d, &v)| self.lower[d] <= v && v <= self.upper[d])
    }

    /// Draws a position uniformly at random within the bounds.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| {
                if lo == hi {
                    lo
                } else {
                    lo + (hi - lo) * rng.uniform(0.0, 1.0)
                }
            })
            .collect()
    }
}

/// An objective function together with its bounds, evaluation budget, and
/// evaluation counter.
pub struct Problem {
    name: String,
    objective: Box<dyn Objective>,
    bounds: Bounds,
    max_evaluations: usize,
    evaluations_used: usize,
}

impl Problem {
    /// Creates a new problem.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `max_evaluations` is 0. The bounds
    /// carry their own validation, so a constructed problem always has a
    /// positive dimension count.
    pub fn new<O>(
        name: impl Into<String>,
        objective: O,
        bounds: Bounds,
        max_evaluations: usize,
    ) -> Result<Self>
    where
        O: Objective + 'static,
    {
        if max_evaluations == 0 {
            return Err(OptimizationError::Configuration(
                "Evaluation budget must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            objective: Box::new(objective),
            bounds,
            max_evaluations,
            evaluations_used: 0,
        })
    }

    /// The diagnostic name of the problem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of dimensions of the search space.
    pub fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    /// The search-space bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The evaluation budget for one run.
    pub fn budget(&self) -> usize {
        self.max_evaluations
    }

    /// The number of evaluations performed so far.
    pub fn evaluations_used(&self) -> usize {
        self.evaluations_used
    }

    /// Returns `true` once the budget has been consumed.
    pub fn exhausted(&self) -> bool {
        self.evaluations_used >= self.max_evaluations
    }

    /// Evaluates the objective at `x`, counting one evaluation.
    ///
    /// The budget is soft: the call succeeds even after exhaustion, so a
    /// population method can finish an indivisible generation.
    pub fn evaluate(&mut self, x: &[f64]) -> f64 {
        debug_assert_eq!(
            x.len(),
            self.dimension(),
            "position length must match the problem dimension"
        );
        self.evaluations_used += 1;
        self.objective.value(x)
    }

    /// Draws a position uniformly within bounds, evaluates it (counting one
    /// evaluation), and returns the resulting solution.
    pub fn sample_random(&mut self, rng: &mut RandomNumberGenerator) -> Solution {
        let position = self.bounds.sample(rng);
        let fitness = self.evaluate(&position);
        Solution::new(position, fitness)
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("max_evaluations", &self.max_evaluations)
            .field("evaluations_used", &self.evaluations_used)
            .finish_non_exhaustive()
    }
}
