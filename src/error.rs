//! # Error Types
//!
//! This module defines the error type for the optimization library.
//! Construction-time invariant violations (mismatched bound vectors,
//! non-positive budgets, non-positive step sizes) fail fast with a
//! [`OptimizationError::Configuration`] error and are never silently coerced.
//!
//! Running out of evaluation budget is *normal termination* for every search
//! strategy and is deliberately not represented here.
//!
//! ## Examples
//!
//! ```rust
//! use metaopt::error::{OptimizationError, Result};
//!
//! fn checked(budget: usize) -> Result<usize> {
//!     if budget == 0 {
//!         return Err(OptimizationError::Configuration(
//!             "Evaluation budget must be greater than 0".to_string(),
//!         ));
//!     }
//!     Ok(budget)
//! }
//!
//! assert!(checked(0).is_err());
//! assert_eq!(checked(100).unwrap(), 100);
//! ```

use thiserror::Error;

/// Represents errors that can occur in the optimization library.
#[derive(Error, Debug)]
pub enum OptimizationError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a statistic is requested over an empty sample.
    #[error("Empty sample error: Cannot summarize an empty collection of fitness values")]
    EmptySample,
}

/// A specialized Result type for optimization operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `OptimizationError`.
pub type Result<T> = std::result::Result<T, OptimizationError>;
