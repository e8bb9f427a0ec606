use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use metaopt::algorithm::{
    AdaptiveHillClimbing, DifferentialEvolution, GreyWolfOptimizer, HillClimbing, RandomSearch,
    SearchAlgorithm,
};
use metaopt::benchmarks::{Rastrigin, Sphere};
use metaopt::problem::{Objective, Problem};
use metaopt::stats::SummaryStatistics;

/// An objective that records every position it is evaluated at.
struct RecordingSphere {
    evaluated: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl Objective for RecordingSphere {
    fn value(&self, x: &[f64]) -> f64 {
        self.evaluated.lock().unwrap().push(x.to_vec());
        x.iter().map(|v| v * v).sum()
    }
}

fn all_algorithms(seed: u64) -> Vec<Box<dyn SearchAlgorithm>> {
    vec![
        Box::new(RandomSearch::from_seed(seed)),
        Box::new(HillClimbing::from_seed(0.1, seed).unwrap()),
        Box::new(AdaptiveHillClimbing::from_seed(0.1, seed).unwrap()),
        Box::new(DifferentialEvolution::from_seed(seed)),
        Box::new(GreyWolfOptimizer::from_seed(seed)),
    ]
}

#[test]
fn every_algorithm_returns_a_solution_within_bounds() {
    for mut algorithm in all_algorithms(17) {
        let mut problem = Rastrigin.problem(3, 600).unwrap();
        let best = algorithm.execute(&mut problem).unwrap();

        assert!(
            problem.bounds().contains(best.position()),
            "{} returned an out-of-bounds position",
            algorithm.name()
        );
        assert!(best.fitness().is_finite());
    }
}

#[test]
fn every_algorithm_consumes_at_least_the_budget() {
    let budget = 500;
    for mut algorithm in all_algorithms(23) {
        let mut problem = Sphere.problem(2, budget).unwrap();
        algorithm.execute(&mut problem).unwrap();

        let used = problem.evaluations_used();
        assert!(
            used >= budget,
            "{} stopped early at {used} evaluations",
            algorithm.name()
        );
        // Population methods may finish an indivisible generation; the
        // largest population here is the grey wolf pack of 30.
        assert!(
            used < budget + 30,
            "{} overshot the budget to {used}",
            algorithm.name()
        );
    }
}

#[test]
fn single_point_algorithms_overshoot_by_at_most_one() {
    let budget = 321;
    let single_point: Vec<Box<dyn SearchAlgorithm>> = vec![
        Box::new(RandomSearch::from_seed(29)),
        Box::new(HillClimbing::from_seed(0.05, 29).unwrap()),
        Box::new(AdaptiveHillClimbing::from_seed(0.05, 29).unwrap()),
    ];

    for mut algorithm in single_point {
        let mut problem = Sphere.problem(2, budget).unwrap();
        algorithm.execute(&mut problem).unwrap();

        let used = problem.evaluations_used();
        assert!(used >= budget && used <= budget + 1, "{} used {used}", algorithm.name());
    }
}

#[test]
fn differential_evolution_stays_within_generation_overshoot() {
    let mut problem = Sphere.problem(2, 100).unwrap();
    let mut algorithm = DifferentialEvolution::from_seed(31);
    let best = algorithm.execute(&mut problem).unwrap();

    let used = problem.evaluations_used();
    assert!((100..=119).contains(&used), "used {used} evaluations");
    assert!(best.fitness().is_finite());
    assert!(best.fitness() >= 0.0);
}

#[test]
fn hill_climbing_never_evaluates_the_same_vector_twice() {
    let evaluated = Arc::new(Mutex::new(Vec::new()));
    let objective = RecordingSphere {
        evaluated: Arc::clone(&evaluated),
    };
    let bounds = Sphere::bounds(2).unwrap();
    let mut problem = Problem::new("recording sphere", objective, bounds, 400).unwrap();

    let mut algorithm = HillClimbing::from_seed(0.1, 37).unwrap();
    algorithm.execute(&mut problem).unwrap();

    let recorded = evaluated.lock().unwrap();
    assert_eq!(recorded.len(), problem.evaluations_used());

    let distinct: HashSet<Vec<u64>> = recorded
        .iter()
        .map(|x| x.iter().map(|v| v.to_bits()).collect())
        .collect();
    assert_eq!(
        distinct.len(),
        recorded.len(),
        "a coordinate vector was evaluated more than once"
    );
}

#[test]
fn adaptive_hill_climbing_never_evaluates_the_same_vector_twice() {
    let evaluated = Arc::new(Mutex::new(Vec::new()));
    let objective = RecordingSphere {
        evaluated: Arc::clone(&evaluated),
    };
    let bounds = Sphere::bounds(2).unwrap();
    let mut problem = Problem::new("recording sphere", objective, bounds, 400).unwrap();

    let mut algorithm = AdaptiveHillClimbing::from_seed(0.1, 41).unwrap();
    algorithm.execute(&mut problem).unwrap();

    let recorded = evaluated.lock().unwrap();
    assert_eq!(recorded.len(), problem.evaluations_used());

    let distinct: HashSet<Vec<u64>> = recorded
        .iter()
        .map(|x| x.iter().map(|v| v.to_bits()).collect())
        .collect();
    assert_eq!(distinct.len(), recorded.len());
}

#[test]
fn random_search_finds_a_near_optimum_on_sphere() {
    // Statistical property: across a handful of seeded runs with a generous
    // budget, at least one lands very close to the origin.
    let mut best_seen = f64::INFINITY;
    for seed in [1, 2, 3] {
        let mut problem = Sphere.problem(2, 100_000).unwrap();
        let mut algorithm = RandomSearch::from_seed(seed);
        let best = algorithm.execute(&mut problem).unwrap();
        best_seen = best_seen.min(best.fitness());
    }

    assert!(best_seen < 0.1, "best fitness across seeds was {best_seen}");
}

#[test]
fn repeated_runs_summarize_cleanly() {
    let finals: Vec<f64> = (0..5)
        .map(|seed| {
            let mut problem = Rastrigin.problem(2, 2_000).unwrap();
            DifferentialEvolution::from_seed(seed)
                .execute(&mut problem)
                .unwrap()
                .fitness()
        })
        .collect();

    let summary = SummaryStatistics::from_values(&finals).unwrap();
    assert!(summary.min.is_finite());
    assert!(summary.min <= summary.mean);
    assert!(summary.std_dev >= 0.0);
}

#[test]
fn fresh_problems_start_with_a_zeroed_counter() {
    // A problem is created once per run; two back-to-back runs must each get
    // their own instance to keep budget accounting intact.
    let mut first = Sphere.problem(2, 50).unwrap();
    RandomSearch::from_seed(5).execute(&mut first).unwrap();
    assert_eq!(first.evaluations_used(), 50);

    let mut second = Sphere.problem(2, 50).unwrap();
    assert_eq!(second.evaluations_used(), 0);
    RandomSearch::from_seed(5).execute(&mut second).unwrap();
    assert_eq!(second.evaluations_used(), 50);
}
