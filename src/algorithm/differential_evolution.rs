//! Differential evolution (DE/rand/1/bin) with fixed control parameters.

use tracing::{debug, trace};

use crate::error::Result;
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::solution::{improves, improves_or_ties, Solution};

use super::SearchAlgorithm;

/// Population size (NP).
const POPULATION_SIZE: usize = 20;
/// Mutation factor (F) scaling the difference vector.
const MUTATION_FACTOR: f64 = 0.6;
/// Crossover rate (CR) for binomial crossover.
const CROSSOVER_RATE: f64 = 0.5;

/// Population-based search combining mutation, binomial crossover and
/// one-to-one selection.
///
/// Per generation, each target vector is challenged by a trial built from
/// three distinct other population members (`x_a + F·(x_b − x_c)`, clamped
/// into bounds, crossed with the target). The trial replaces the target when
/// its fitness is at least as good — ties favor the trial, biasing the
/// population toward turnover. Generations are indivisible: a run may
/// overshoot the nominal budget by up to NP−1 evaluations.
#[derive(Debug)]
pub struct DifferentialEvolution {
    rng: RandomNumberGenerator,
}

impl DifferentialEvolution {
    /// Creates a differential evolution instance seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: RandomNumberGenerator::new(),
        }
    }

    /// Creates a differential evolution instance with a fixed seed for
    /// reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RandomNumberGenerator::from_seed(seed),
        }
    }

    /// Picks three population indices, pairwise distinct and all different
    /// from `target`.
    fn pick_distinct(&mut self, target: usize) -> (usize, usize, usize) {
        let a = loop {
            let i = self.rng.index(POPULATION_SIZE);
            if i != target {
                break i;
            }
        };
        let b = loop {
            let i = self.rng.index(POPULATION_SIZE);
            if i != target && i != a {
                break i;
            }
        };
        let c = loop {
            let i = self.rng.index(POPULATION_SIZE);
            if i != target && i != a && i != b {
                break i;
            }
        };
        (a, b, c)
    }
}

impl Default for DifferentialEvolution {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for DifferentialEvolution {
    fn name(&self) -> &str {
        "DifferentialEvolution"
    }

    fn execute(&mut self, problem: &mut Problem) -> Result<Solution> {
        let dimension = problem.dimension();

        let mut population: Vec<Solution> = (0..POPULATION_SIZE)
            .map(|_| problem.sample_random(&mut self.rng))
            .collect();

        let mut best = population[0].clone();
        for candidate in &population {
            if improves(candidate.fitness(), best.fitness()) {
                best = candidate.clone();
            }
        }

        let mut generation: u64 = 0;
        while !problem.exhausted() {
            let mut next_population = Vec::with_capacity(POPULATION_SIZE);

            for i in 0..POPULATION_SIZE {
                let (a, b, c) = self.pick_distinct(i);

                let mut mutant = vec![0.0; dimension];
                for j in 0..dimension {
                    let v = population[a].position()[j]
                        + MUTATION_FACTOR
                            * (population[b].position()[j] - population[c].position()[j]);
                    mutant[j] = problem.bounds().clamp_coordinate(j, v);
                }

                // One dimension always takes the mutant's value, so the trial
                // differs from the target in at least one coordinate.
                let forced = self.rng.index(dimension);
                let mut trial = vec![0.0; dimension];
                for j in 0..dimension {
                    let from_mutant = j == forced || self.rng.uniform(0.0, 1.0) < CROSSOVER_RATE;
                    let value = if from_mutant {
                        mutant[j]
                    } else {
                        population[i].position()[j]
                    };
                    trial[j] = problem.bounds().clamp_coordinate(j, value);
                }

                let fitness = problem.evaluate(&trial);

                if improves_or_ties(fitness, population[i].fitness()) {
                    if improves(fitness, best.fitness()) {
                        debug!(
                            evaluations = problem.evaluations_used(),
                            fitness, "new best solution"
                        );
                        best = Solution::new(trial.clone(), fitness);
                    }
                    next_population.push(Solution::new(trial, fitness));
                } else {
                    next_population.push(population[i].clone());
                }
            }

            population = next_population;
            generation += 1;
            trace!(
                generation,
                evaluations = problem.evaluations_used(),
                best = best.fitness(),
                "generation complete"
            );
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
    fn test_pick_distinct_indices() {
        let mut algorithm = DifferentialEvolution::from_seed(5);
        for target in 0..POPULATION_SIZE {
            let (a, b, c) = algorithm.pick_distinct(target);
            assert_ne!(a, target);
            assert_ne!(b, target);
            assert_ne!(c, target);
            assert_ne!(a, b);
            assert_ne!(a, c);
            assert_ne!(b, c);
        }
    }

    #[test]
    fn test_budget_overshoot_bounded_by_generation_size() {
        let mut problem = sphere_problem(100);
        let mut algorithm = DifferentialEvolution::from_seed(6);
        let best = algorithm.execute(&mut problem).unwrap();

        let used = problem.evaluations_used();
        assert!(used >= 100);
        assert!(used <= 100 + POPULATION_SIZE - 1);
        assert!(best.fitness().is_finite());
        assert!(best.fitness() >= 0.0);
    }

    #[test]
    fn test_result_within_bounds() {
        let mut problem = sphere_problem(1_000);
        let mut algorithm = DifferentialEvolution::from_seed(7);
        let best = algorithm.execute(&mut problem).unwrap();

        assert!(problem.bounds().contains(best.position()));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let best1 = DifferentialEvolution::from_seed(42)
            .execute(&mut sphere_problem(500))
            .unwrap();
        let best2 = DifferentialEvolution::from_seed(42)
            .execute(&mut sphere_problem(500))
            .unwrap();

        assert_eq!(best1.position(), best2.position());
        assert_eq!(best1.fitness(), best2.fitness());
    }
}
