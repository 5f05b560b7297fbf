//! Distribution traits.

use crate::stats::error::{StatsError, StatsResult};

/// Summary statistics shared by all distributions.
pub trait Distribution {
    /// Mean (expected value).
    fn mean(&self) -> f64;

    /// Variance.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Differential entropy in nats.
    fn entropy(&self) -> f64;

    /// Median.
    fn median(&self) -> f64;

    /// Mode. `NaN` when the distribution has no unique mode.
    fn mode(&self) -> f64;

    /// Skewness.
    fn skewness(&self) -> f64;

    /// Excess kurtosis.
    fn kurtosis(&self) -> f64;
}

/// A univariate continuous distribution.
///
/// Probabilities passed to [`ppf`](Self::ppf) and [`isf`](Self::isf) are not
/// rejected when they fall outside [0, 1]: they are clamped to the nearest
/// end of the support. `NaN` propagates.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the probability density function.
    fn log_pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse CDF).
    ///
    /// # Errors
    ///
    /// Fails only when an iterative inversion does not converge.
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Inverse survival function.
    fn isf(&self, q: f64) -> StatsResult<f64> {
        self.ppf(1.0 - q)
    }

    /// Central interval containing `confidence` of the probability mass.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] if `confidence` is outside
    /// [0, 1], or propagates a failure of [`ppf`](Self::ppf).
    fn interval(&self, confidence: f64) -> StatsResult<(f64, f64)> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(StatsError::invalid(
                "confidence",
                confidence,
                "must be in [0, 1]",
            ));
        }
        let tail = (1.0 - confidence) / 2.0;
        Ok((self.ppf(tail)?, self.ppf(1.0 - tail)?))
    }
}
