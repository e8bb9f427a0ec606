//! # Search Algorithms
//!
//! This module provides the search strategies that minimize an objective over
//! a bounded search space under a fixed evaluation budget.
//!
//! Every strategy implements [`SearchAlgorithm`] and only interacts with the
//! problem through its capability surface: `evaluate`, `sample_random`, the
//! bounds, and the budget counters. Strategies never interact with each
//! other.

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::Solution;

pub mod adaptive_hill_climbing;
pub mod differential_evolution;
pub mod grey_wolf;
pub mod hill_climbing;
pub mod random_search;

pub use adaptive_hill_climbing::AdaptiveHillClimbing;
pub use differential_evolution::DifferentialEvolution;
pub use grey_wolf::GreyWolfOptimizer;
pub use hill_climbing::HillClimbing;
pub use random_search::RandomSearch;

/// A metaheuristic search strategy.
///
/// An algorithm instance owns its own random number generator and working
/// state; `execute` takes the problem by exclusive reference for the duration
/// of one run and returns an independent snapshot of the best solution found.
/// Runs terminate on budget exhaustion, never on stagnation.
pub trait SearchAlgorithm {
    /// The diagnostic name of the strategy.
    fn name(&self) -> &str;

    /// Runs the search on `problem` until its evaluation budget is consumed.
    fn execute(&mut self, problem: &mut Problem) -> Result<Solution>;
}
