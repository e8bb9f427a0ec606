//! # metaopt
//!
//! A metaheuristic black-box optimization library for bounded continuous
//! search spaces.
//!
//! The library minimizes a scalar fitness (lower is better) over a box-bounded
//! real vector space under a fixed evaluation budget. An [`Objective`] is a
//! pure function of a coordinate vector; a [`Problem`] wraps it together with
//! its [`Bounds`] and budget and counts every evaluation; a
//! [`SearchAlgorithm`] consumes the problem and returns the best [`Solution`]
//! it found.
//!
//! Five strategies are provided:
//!
//! - [`RandomSearch`] — pure uniform sampling, the baseline.
//! - [`HillClimbing`] — fixed-step local search with exact-duplicate
//!   detection and random restarts.
//! - [`AdaptiveHillClimbing`] — the same skeleton with an adaptive step-size
//!   controller.
//! - [`DifferentialEvolution`] — DE/rand/1/bin with fixed control parameters.
//! - [`GreyWolfOptimizer`] — an improved grey-wolf swarm method with
//!   boundary equalization and per-wolf personal-best memory.
//!
//! ## Example
//!
//! ```rust
//! use metaopt::algorithm::{DifferentialEvolution, SearchAlgorithm};
//! use metaopt::benchmarks::Sphere;
//!
//! let mut problem = Sphere.problem(2, 1_000).unwrap();
//! let mut algorithm = DifferentialEvolution::from_seed(42);
//! let best = algorithm.execute(&mut problem).unwrap();
//!
//! assert!(best.fitness().is_finite());
//! assert!(problem.bounds().contains(best.position()));
//! ```
//!
//! ## Reproducibility
//!
//! Every algorithm owns its own random number generator. The `from_seed`
//! constructors make a run fully deterministic; the `new` constructors seed
//! from system entropy.

pub mod algorithm;
pub mod benchmarks;
pub mod error;
pub mod problem;
pub mod rng;
pub mod solution;
pub mod stats;

// Re-export commonly used types for convenience
pub use algorithm::{
    AdaptiveHillClimbing, DifferentialEvolution, GreyWolfOptimizer, HillClimbing, RandomSearch,
    SearchAlgorithm,
};
pub use error::{OptimizationError, Result};
pub use problem::{Bounds, Objective, Problem};
pub use rng::RandomNumberGenerator;
pub use solution::Solution;
