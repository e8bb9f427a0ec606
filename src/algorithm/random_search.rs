//! Pure random search, the baseline every other strategy is measured against.

use tracing::debug;

use crate::error::Result;
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::solution::{improves, Solution};

use super::SearchAlgorithm;

/// Samples uniformly within bounds until the budget is exhausted and keeps
/// the best solution seen. No restarts, no memory beyond the running best.
#[derive(Debug)]
pub struct RandomSearch {
    rng: RandomNumberGenerator,
}

impl RandomSearch {
    /// Creates a random search seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: RandomNumberGenerator::new(),
        }
    }

    /// Creates a random search with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RandomNumberGenerator::from_seed(seed),
        }
    }
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for RandomSearch {
    fn name(&self) -> &str {
        "RandomSearch"
    }

    fn execute(&mut self, problem: &mut Problem) -> Result<Solution> {
        let mut best = problem.sample_random(&mut self.rng);

        while !problem.exhausted() {
            let candidate = problem.sample_random(&mut self.rng);
            if improves(candidate.fitness(), best.fitness()) {
                debug!(
                    evaluations = problem.evaluations_used(),
                    fitness = candidate.fitness(),
                    "new best solution"
                );
                best = candidate;
            }
        }

        Ok(best)
    }
}
