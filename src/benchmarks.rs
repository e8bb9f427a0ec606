//! # Benchmark Objectives
//!
//! Closed-form objective functions commonly used to exercise the search
//! strategies, each with its conventional bound vectors. All are minimization
//! problems; the `problem` constructors return a ready [`Problem`] with the
//! function's canonical bounds.
//!
//! ```rust
//! use metaopt::benchmarks::Rastrigin;
//!
//! let problem = Rastrigin.problem(2, 1_000).unwrap();
//! assert_eq!(problem.dimension(), 2);
//! ```

use std::f64::consts::{E, PI};

use crate::error::Result;
use crate::problem::{Bounds, Objective, Problem};

/// Sum of squares. Global minimum 0 at the origin.
///
/// Bounds alternate per dimension between ±10 (even dimensions) and ±100
/// (odd dimensions).
#[derive(Debug, Clone, Copy)]
pub struct Sphere;

impl Objective for Sphere {
    fn value(&self, x: &[f64]) -> f64 {
        x.iter().map(|&v| v * v).sum()
    }
}

impl Sphere {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        let (mut lower, mut upper) = (Vec::with_capacity(dimension), Vec::with_capacity(dimension));
        for i in 0..dimension {
            let half_range = if i % 2 == 0 { 10.0 } else { 100.0 };
            lower.push(-half_range);
            upper.push(half_range);
        }
        Bounds::new(lower, upper)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Sphere", self, Self::bounds(dimension)?, budget)
    }
}

/// Highly multimodal cosine-modulated bowl. Global minimum 0 at the origin.
/// Bounds ±5.12.
#[derive(Debug, Clone, Copy)]
pub struct Rastrigin;

impl Objective for Rastrigin {
    fn value(&self, x: &[f64]) -> f64 {
        let sum: f64 = x
            .iter()
            .map(|&v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum();
        10.0 * x.len() as f64 + sum
    }
}

impl Rastrigin {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 5.12)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Rastrigin", self, Self::bounds(dimension)?, budget)
    }
}

/// Nearly flat outer region with a large central funnel. Global minimum 0 at
/// the origin. Bounds ±32.768.
#[derive(Debug, Clone, Copy)]
pub struct Ackley;

impl Objective for Ackley {
    fn value(&self, x: &[f64]) -> f64 {
        const A: f64 = 20.0;
        const B: f64 = 0.2;
        const C: f64 = 2.0 * PI;

        let n = x.len() as f64;
        let sum_squares: f64 = x.iter().map(|&v| v * v).sum();
        let sum_cosines: f64 = x.iter().map(|&v| (C * v).cos()).sum();

        -A * (-B * (sum_squares / n).sqrt()).exp() - (sum_cosines / n).exp() + A + E
    }
}

impl Ackley {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 32.768)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Ackley", self, Self::bounds(dimension)?, budget)
    }
}

/// Many widespread regularly distributed local minima. Global minimum 0 at
/// the origin. Bounds ±600.
#[derive(Debug, Clone, Copy)]
pub struct Griewank;

impl Objective for Griewank {
    fn value(&self, x: &[f64]) -> f64 {
        let sum: f64 = x.iter().map(|&v| v * v / 4000.0).sum();
        let product: f64 = x
            .iter()
            .enumerate()
            .map(|(i, &v)| (v / ((i + 1) as f64).sqrt()).cos())
            .product();
        sum - product + 1.0
    }
}

impl Griewank {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 600.0)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Griewank", self, Self::bounds(dimension)?, budget)
    }
}

/// Smooth multimodal function. Global minimum 0 at `x = (1, …, 1)`.
/// Bounds ±10.
#[derive(Debug, Clone, Copy)]
pub struct Levy;

impl Objective for Levy {
    fn value(&self, x: &[f64]) -> f64 {
        let w: Vec<f64> = x.iter().map(|&v| 1.0 + (v - 1.0) / 4.0).collect();
        let d = w.len();

        let term1 = (PI * w[0]).sin().powi(2);
        let term3 =
            (w[d - 1] - 1.0).powi(2) * (1.0 + (2.0 * PI * w[d - 1]).sin().powi(2));
        let sum: f64 = w[..d - 1]
            .iter()
            .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
            .sum();

        term1 + sum + term3
    }
}

impl Levy {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 10.0)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Levy", self, Self::bounds(dimension)?, budget)
    }
}

/// Deceptive function whose global minimum sits far from the next-best local
/// minima, near the bound corners. Bounds ±500.
#[derive(Debug, Clone, Copy)]
pub struct Schwefel;

impl Objective for Schwefel {
    fn value(&self, x: &[f64]) -> f64 {
        -x.iter().map(|&v| v * v.abs().sqrt().sin()).sum::<f64>()
    }
}

impl Schwefel {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 500.0)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Schwefel", self, Self::bounds(dimension)?, budget)
    }
}

/// The banana-shaped valley. Global minimum 0 at `x = (1, …, 1)`.
/// Bounds `[-5, 10]`.
#[derive(Debug, Clone, Copy)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    fn value(&self, x: &[f64]) -> f64 {
        x.windows(2)
            .map(|pair| {
                let (xi, xj) = (pair[0], pair[1]);
                100.0 * (xj - xi * xi).powi(2) + (xi - 1.0).powi(2)
            })
            .sum()
    }
}

impl Rosenbrock {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::repeated(dimension, -5.0, 10.0)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Rosenbrock", self, Self::bounds(dimension)?, budget)
    }
}

/// Quartic function with one global and several local minima, global minimum
/// ≈ −39.166·d at `x_i ≈ −2.9035`. Bounds ±5.
#[derive(Debug, Clone, Copy)]
pub struct StyblinskiTang;

impl Objective for StyblinskiTang {
    fn value(&self, x: &[f64]) -> f64 {
        x.iter()
            .map(|&v| v.powi(4) - 16.0 * v * v + 5.0 * v)
            .sum::<f64>()
            / 2.0
    }
}

impl StyblinskiTang {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::symmetric(dimension, 5.0)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Styblinski-Tang", self, Self::bounds(dimension)?, budget)
    }
}

/// Steep sine-valley function with a vanishing landscape between ridges.
/// Bounds `[0, π]`.
#[derive(Debug, Clone, Copy)]
pub struct Michalewicz;

impl Objective for Michalewicz {
    fn value(&self, x: &[f64]) -> f64 {
        const M: i32 = 20;
        -x.iter()
            .enumerate()
            .map(|(i, &v)| v.sin() * (((i + 1) as f64) * v * v / PI).sin().powi(M))
            .sum::<f64>()
    }
}

impl Michalewicz {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        Bounds::repeated(dimension, 0.0, PI)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Michalewicz", self, Self::bounds(dimension)?, budget)
    }
}

/// Bowl with cross-terms; the bound range grows with the dimension count
/// (±d²).
#[derive(Debug, Clone, Copy)]
pub struct Trid;

impl Objective for Trid {
    fn value(&self, x: &[f64]) -> f64 {
        let sum1: f64 = x.iter().map(|&v| (v - 1.0).powi(2)).sum();
        let sum2: f64 = x.windows(2).map(|pair| pair[0] * pair[1]).sum();
        sum1 - sum2
    }
}

impl Trid {
    pub fn bounds(dimension: usize) -> Result<Bounds> {
        let half_range = (dimension * dimension) as f64;
        Bounds::symmetric(dimension, half_range)
    }

    pub fn problem(self, dimension: usize, budget: usize) -> Result<Problem> {
        Problem::new("Trid", self, Self::bounds(dimension)?, budget)
    }
}

/// Two-dimensional multimodal plate function. Bounds ±10.
#[derive(Debug, Clone, Copy)]
pub struct CarromTable;

impl Objective for CarromTable {
    fn value(&self, x: &[f64]) -> f64 {
        let (x1, x2) = (x[0], x[1]);
        let distance = (x1 * x1 + x2 * x2).sqrt();
        let envelope = (2.0 * (1.0 - distance / PI).abs()).exp();
        -(1.0 / 30.0) * envelope * x1.cos().powi(2) * x2.cos().powi(2)
    }
}

impl CarromTable {
    pub fn bounds() -> Result<Bounds> {
        Bounds::symmetric(2, 10.0)
    }

    pub fn problem(self, budget: usize) -> Result<Problem> {
        Problem::new("CarromTable", self, Self::bounds()?, budget)
    }
}

/// Bukin N.6, a two-dimensional ridge function with asymmetric bounds
/// `[-15, -5] × [-3, 3]`. Global minimum 0 at `(-10, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct Bukin;

impl Objective for Bukin {
    fn value(&self, x: &[f64]) -> f64 {
        let (x1, x2) = (x[0], x[1]);
        100.0 * (x2 - 0.01 * x1 * x1).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
    }
}

impl Bukin {
    pub fn bounds() -> Result<Bounds> {
        Bounds::new(vec![-15.0, -3.0], vec![-5.0, 3.0])
    }

    pub fn problem(self, budget: usize) -> Result<Problem> {
        Problem::new("Bukin", self, Self::bounds()?, budget)
    }
}
