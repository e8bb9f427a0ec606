//! Hill climbing with an adaptive step-size controller.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{OptimizationError, Result};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::solution::{improves, Solution};

use super::hill_climbing::{bit_key, neighborhood, restart};
use super::SearchAlgorithm;

const MIN_STEP_SIZE: f64 = 0.001;
const MAX_STEP_SIZE: f64 = 1.0;
const STEP_GROWTH: f64 = 1.1;
const STEP_SHRINK: f64 = 0.9;
const STAGNATION_LIMIT: u32 = 2;

/// The [`HillClimbing`](super::HillClimbing) skeleton with a minimal
/// exploration/exploitation controller on the step size.
///
/// The step size stays within `[0.001, 1.0]`. Every accepted improving move
/// grows it by 10% (reward progress with larger exploration steps); two
/// consecutive iterations without an accepted move shrink it by 10% and reset
/// the stagnation counter (exploit a promising region with finer steps). Any
/// improving move also resets the counter.
#[derive(Debug)]
pub struct AdaptiveHillClimbing {
    initial_step_size: f64,
    rng: RandomNumberGenerator,
}

impl AdaptiveHillClimbing {
    /// Creates an adaptive hill climber with the given initial step size,
    /// seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `initial_step_size` is not a
    /// positive finite number.
    pub fn new(initial_step_size: f64) -> Result<Self> {
        Self::with_rng(initial_step_size, RandomNumberGenerator::new())
    }

    /// Creates an adaptive hill climber with a fixed seed for reproducible
    /// runs.
    pub fn from_seed(initial_step_size: f64, seed: u64) -> Result<Self> {
        Self::with_rng(initial_step_size, RandomNumberGenerator::from_seed(seed))
    }

    fn with_rng(initial_step_size: f64, rng: RandomNumberGenerator) -> Result<Self> {
        if !initial_step_size.is_finite() || initial_step_size <= 0.0 {
            return Err(OptimizationError::Configuration(
                "Initial step size must be a positive finite number".to_string(),
            ));
        }
        Ok(Self {
            initial_step_size,
            rng,
        })
    }
}

impl SearchAlgorithm for AdaptiveHillClimbing {
    fn name(&self) -> &str {
        "AdaptiveHillClimbing"
    }

    fn execute(&mut self, problem: &mut Problem) -> Result<Solution> {
        let mut visited: HashSet<Vec<u64>> = HashSet::new();
        let mut step_size = self.initial_step_size;
        let mut stagnant_iterations: u32 = 0;

        let start = problem.sample_random(&mut self.rng);
        let mut current = start.position().to_vec();
        let mut current_fitness = start.fitness();
        let mut best = start;
        visited.insert(bit_key(&current));

        while !problem.exhausted() {
            let mut best_neighbor: Option<(Vec<f64>, f64)> = None;

            for neighbor in neighborhood(&current, step_size, problem.bounds()) {
                let key = bit_key(&neighbor);
                if visited.contains(&key) {
                    continue;
                }

                let fitness = problem.evaluate(&neighbor);
                visited.insert(key);

                let is_best_so_far = match &best_neighbor {
                    Some((_, incumbent)) => improves(fitness, *incumbent),
                    None => true,
                };
                if is_best_so_far {
                    best_neighbor = Some((neighbor.clone(), fitness));
                }

                if improves(fitness, best.fitness()) {
                    debug!(
                        evaluations = problem.evaluations_used(),
                        fitness, step_size, "new global best"
                    );
                    best = Solution::new(neighbor, fitness);
                }

                if problem.exhausted() {
                    break;
                }
            }

            if problem.exhausted() {
                break;
            }

            match best_neighbor {
                Some((position, fitness)) if improves(fitness, current_fitness) => {
                    current = position;
                    current_fitness = fitness;
                    stagnant_iterations = 0;
                    step_size = (step_size * STEP_GROWTH).min(MAX_STEP_SIZE);
                }
                _ => {
                    stagnant_iterations += 1;
                    if stagnant_iterations >= STAGNATION_LIMIT {
                        step_size = (step_size * STEP_SHRINK).max(MIN_STEP_SIZE);
                        stagnant_iterations = 0;
                        debug!(step_size, "shrinking step size after stagnation");
                    }

                    let (position, fitness) = restart(problem, &mut self.rng, &mut visited);
                    if improves(fitness, best.fitness()) {
                        debug!(
                            evaluations = problem.evaluations_used(),
                            fitness, "new global best after restart"
                        );
                        best = Solution::new(position.clone(), fitness);
                    }
                    current = position;
                    current_fitness = fitness;
                }
            }
        }

        Ok(best)
    }
}
