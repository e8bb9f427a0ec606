//! # Solution
//!
//! A [`Solution`] is a snapshot of a position in the search space together
//! with its fitness, plus a personal-best memory pair used by the swarm
//! method. Solutions returned by an algorithm are independent copies, never
//! aliased to algorithm-internal buffers.
//!
//! The module also hosts the crate-wide fitness comparison policy: fitness is
//! minimized, and a non-finite value (NaN or infinity) is treated as strictly
//! worse than any finite value. Two non-finite values compare equal.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orders two fitness values under the minimization policy.
///
/// Finite values compare numerically; any non-finite value is greater than
/// (worse than) every finite value; two non-finite values are equal.
pub fn fitness_order(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Returns `true` if `candidate` is strictly better (lower) than `incumbent`.
pub fn improves(candidate: f64, incumbent: f64) -> bool {
    fitness_order(candidate, incumbent) == Ordering::Less
}

/// Returns `true` if `candidate` is at least as good as `incumbent`.
///
/// Differential evolution resolves selection ties in favor of the trial
/// vector through this predicate.
pub fn improves_or_ties(candidate: f64, incumbent: f64) -> bool {
    fitness_order(candidate, incumbent) != Ordering::Greater
}

/// A candidate solution: a position vector, its fitness, and the best
/// position/fitness pair this candidate has ever held.
///
/// For algorithms without per-candidate memory the personal best simply
/// equals the state the solution was created with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    position: Vec<f64>,
    fitness: f64,
    best_position: Vec<f64>,
    best_fitness: f64,
}

impl Solution {
    /// Creates a new solution. The personal best is initialized to the given
    /// position and fitness.
    pub fn new(position: Vec<f64>, fitness: f64) -> Self {
        let best_position = position.clone();
        Self {
            position,
            fitness,
            best_position,
            best_fitness: fitness,
        }
    }

    /// The current position vector.
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// The fitness of the current position. Lower is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The best position this solution has ever held.
    pub fn personal_best(&self) -> &[f64] {
        &self.best_position
    }

    /// The fitness of the personal-best position.
    pub fn personal_best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Replaces the current position and fitness, folding the new state into
    /// the personal best only when it improves on it.
    pub fn update(&mut self, position: Vec<f64>, fitness: f64) {
        if improves(fitness, self.best_fitness) {
            self.best_position = position.clone();
            self.best_fitness = fitness;
        }
        self.position = position;
        self.fitness = fitness;
    }
}
