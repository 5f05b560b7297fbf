//! probr - Incomplete Beta Kernels and Probability Distributions
//!
//! probr computes the regularized incomplete beta function and its inverse to
//! near machine precision, and builds univariate distributions on top of them:
//! a generalized Beta distribution on an arbitrary interval [a, b], plus the
//! Normal and Uniform distributions sharing the same interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      stats                               │
//! │   (Beta, Normal, Uniform, batch dispatch, sampling)     │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                     special                              │
//! │        (ln_beta, betainc, betaincinv kernels)           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`special`] - Pure numerical kernels taking a precomputed ln B(α, β)
//! - [`stats`] - Distributions, the `Distribution` traits, batch evaluation
//!
//! # Example
//!
//! ```
//! use probr::stats::{Beta, ContinuousDistribution, batch};
//!
//! let d = Beta::new(2.0, 3.0, -1.0, 2.0).unwrap();
//! let f = batch::cdf(&d, &[-2.0, -0.85, 3.0]);
//! assert_eq!(f[0], 0.0);
//! assert!((f[1] - 0.01401875).abs() < 1e-14);
//! assert_eq!(f[2], 1.0);
//!
//! let x = d.ppf(0.5).unwrap();
//! assert!((d.cdf(x) - 0.5).abs() < 1e-12);
//! ```
//!
//! # Logging
//!
//! The kernels report through the `log` facade: seeds and convergence of
//! the inverse at `trace` level, exhausted iteration budgets at `warn`.
//! No logger is installed by the library.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod special;
pub mod stats;

pub use special::{InverseOptions, NonConvergence, betainc, betaincinv, ln_beta};
pub use stats::{
    Beta, ContinuousDistribution, Distribution, Normal, StatsError, StatsResult, Uniform,
};
