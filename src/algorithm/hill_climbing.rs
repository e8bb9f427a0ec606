//! Hill climbing with exact-duplicate detection and random restarts.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{OptimizationError, Result};
use crate::problem::{Bounds, Problem};
use crate::rng::RandomNumberGenerator;
use crate::solution::{improves, Solution};

use super::SearchAlgorithm;

/// An exact, order-preserving key for a coordinate vector: the literal bit
/// pattern of each coordinate. Only literal duplicates collide; nearby points
/// do not.
pub(crate) fn bit_key(x: &[f64]) -> Vec<u64> {
    x.iter().map(|v| v.to_bits()).collect()
}

/// Generates the ±step neighbors of `current`: two per dimension, each
/// clamped into bounds on the perturbed coordinate.
pub(crate) fn neighborhood(current: &[f64], step_size: f64, bounds: &Bounds) -> Vec<Vec<f64>> {
    let mut neighbors = Vec::with_capacity(2 * current.len());
    for d in 0..current.len() {
        for direction in [-1.0, 1.0] {
            let mut neighbor = current.to_vec();
            neighbor[d] = bounds.clamp_coordinate(d, neighbor[d] + direction * step_size);
            neighbors.push(neighbor);
        }
    }
    neighbors
}

/// Draws random positions until one misses the visited set, then evaluates
/// it. Used for restarts after a stagnant neighbor sweep.
pub(crate) fn restart(
    problem: &mut Problem,
    rng: &mut RandomNumberGenerator,
    visited: &mut HashSet<Vec<u64>>,
) -> (Vec<f64>, f64) {
    let mut position = problem.bounds().sample(rng);
    while visited.contains(&bit_key(&position)) {
        position = problem.bounds().sample(rng);
    }
    let fitness = problem.evaluate(&position);
    visited.insert(bit_key(&position));
    (position, fitness)
}

/// Local search that sweeps the ±step neighborhood of the current point,
/// moves to the best strictly improving neighbor, and restarts from a fresh
/// random point when stuck.
///
/// Every evaluated position is remembered in a visited set keyed by the exact
/// bit pattern of its coordinates, so no vector is ever evaluated twice in
/// one run. The returned solution is a separately tracked global best: the
/// local search may wander away from it to escape a local minimum. The run
/// ends only when the evaluation budget is exhausted.
#[derive(Debug)]
pub struct HillClimbing {
    step_size: f64,
    rng: RandomNumberGenerator,
}

impl HillClimbing {
    /// Creates a hill climber with the given neighbor step size, seeded from
    /// system entropy.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `step_size` is not a positive
    /// finite number.
    pub fn new(step_size: f64) -> Result<Self> {
        Self::with_rng(step_size, RandomNumberGenerator::new())
    }

    /// Creates a hill climber with a fixed seed for reproducible runs.
    pub fn from_seed(step_size: f64, seed: u64) -> Result<Self> {
        Self::with_rng(step_size, RandomNumberGenerator::from_seed(seed))
    }

    fn with_rng(step_size: f64, rng: RandomNumberGenerator) -> Result<Self> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(OptimizationError::Configuration(
                "Step size must be a positive finite number".to_string(),
            ));
        }
        Ok(Self { step_size, rng })
    }
}

impl SearchAlgorithm for HillClimbing {
    fn name(&self) -> &str {
        "HillClimbing"
    }

    fn execute(&mut self, problem: &mut Problem) -> Result<Solution> {
        let mut visited: HashSet<Vec<u64>> = HashSet::new();

        let start = problem.sample_random(&mut self.rng);
        let mut current = start.position().to_vec();
        let mut current_fitness = start.fitness();
        let mut best = start;
        visited.insert(bit_key(&current));

        while !problem.exhausted() {
            let mut best_neighbor: Option<(Vec<f64>, f64)> = None;

            for neighbor in neighborhood(&current, self.step_size, problem.bounds()) {
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
                        fitness, "new global best"
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
                }
                _ => {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Bounds;

    fn sphere_problem(budget: usize) -> Problem {
        let bounds = Bounds::symmetric(2, 5.0).unwrap();
        Problem::new(
            "sphere",
            |x: &[f64]| -> f64 { x.iter().map(|v| v * v).sum() },
            bounds,
            budget,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_step() {
        assert!(HillClimbing::new(0.0).is_err());
        assert!(HillClimbing::new(-0.5).is_err());
        assert!(HillClimbing::new(f64::NAN).is_err());
    }

    #[test]
    fn test_consumes_exactly_the_budget() {
        let mut problem = sphere_problem(300);
        let mut algorithm = HillClimbing::from_seed(0.1, 7).unwrap();
        algorithm.execute(&mut problem).unwrap();

        assert_eq!(problem.evaluations_used(), 300);
    }

    #[test]
    fn test_result_within_bounds_and_finite() {
        let mut problem = sphere_problem(500);
        let mut algorithm = HillClimbing::from_seed(0.1, 8).unwrap();
        let best = algorithm.execute(&mut problem).unwrap();

        assert!(problem.bounds().contains(best.position()));
        assert!(best.fitness().is_finite());
    }

    #[test]
    fn test_neighborhood_shape_and_clamping() {
        let bounds = Bounds::symmetric(2, 1.0).unwrap();
        let neighbors = neighborhood(&[0.95, 0.0], 0.1, &bounds);

        assert_eq!(neighbors.len(), 4);
        // The +step neighbor in dimension 0 is clamped to the upper limit.
        assert_eq!(neighbors[1], vec![1.0, 0.0]);
        assert_eq!(neighbors[0], vec![0.85, 0.0]);
        for neighbor in &neighbors {
            assert!(bounds.contains(neighbor));
        }
    }

    #[test]
    fn test_bit_key_distinguishes_signed_zero() {
        assert_ne!(bit_key(&[0.0]), bit_key(&[-0.0]));
        assert_eq!(bit_key(&[1.5, 2.5]), bit_key(&[1.5, 2.5]));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let best1 = HillClimbing::from_seed(0.1, 42)
            .unwrap()
            .execute(&mut sphere_problem(400))
            .unwrap();
        let best2 = HillClimbing::from_seed(0.1, 42)
            .unwrap()
            .execute(&mut sphere_problem(400))
            .unwrap();

        assert_eq!(best1.position(), best2.position());
        assert_eq!(best1.fitness(), best2.fitness());
    }
}
