//! Scalar special functions behind the beta family.
//!
//! All functions here are pure: they read only their arguments and keep no
//! state between calls, so they can be used from any number of threads.
//!
//! # Algorithms
//!
//! - **ln_beta**: ln Γ(α) + ln Γ(β) − ln Γ(α+β) with `libm`'s log-gamma
//! - **betainc**: Soper's reduction formula (AS 63) with tail flip
//! - **betaincinv**: AS 109 seed followed by a safeguarded Newton–Raphson search
//!
//! The incomplete beta routines take `ln_beta` as an argument so that a caller
//! evaluating many points for the same (α, β) computes it once.

mod incomplete_beta;
mod inverse_incomplete_beta;

use std::fmt;

pub use incomplete_beta::betainc;
pub use inverse_incomplete_beta::{Phase, QuantileSearch, betaincinv, betaincinv_with};

/// Convergence tolerance of the Soper series, absolute and relative.
pub(crate) const SERIES_TOLERANCE: f64 = 1e-15;

/// Seeds of the quantile search are kept this far away from 0 and 1.
pub(crate) const SEED_MARGIN: f64 = 1e-4;

/// Accepted range of [`InverseOptions::precision_floor`].
///
/// The upper end is the loosest precision the adaptive rule ever asks for;
/// the lower end keeps 10^floor a normal, non-zero `f64`.
pub(crate) const PRECISION_FLOOR_RANGE: (i32, i32) = (-300, -13);

/// Log of the complete beta function: ln B(α, β).
///
/// Not guarded: non-positive arguments give `inf` or `NaN`.
///
/// Log-gamma is `libm`'s fdlibm port, within an ulp or so at integer shapes.
pub fn ln_beta(alpha: f64, beta: f64) -> f64 {
    use libm::lgamma;

    lgamma(alpha) + lgamma(beta) - lgamma(alpha + beta)
}

/// Options for the inverse incomplete beta refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseOptions {
    /// Maximum number of Newton iterations before giving up
    pub max_iter: usize,
    /// Decimal exponent of the tightest accepted precision (1e-30 by default).
    ///
    /// Clamped to [-300, -13] when a search is created.
    pub precision_floor: i32,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            precision_floor: -30,
        }
    }
}

/// The quantile search ran out of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonConvergence {
    /// Newton iterations performed
    pub iterations: usize,
    /// Best estimate when the search stopped
    pub estimate: f64,
}

impl fmt::Display for NonConvergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inverse incomplete beta did not converge after {} iterations (last estimate {})",
            self.iterations, self.estimate
        )
    }
}

impl std::error::Error for NonConvergence {}
