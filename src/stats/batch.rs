//! Distribution-agnostic evaluation over point sets.
//!
//! These functions accept any [`ContinuousDistribution`] and evaluate it
//! point by point. The output always has the same length and order as the
//! input; points are independent of each other.

use rand::Rng;
use rand::distr::Distribution as RandDistribution;

use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::StatsResult;

/// Evaluate the CDF at each point.
pub fn cdf<D>(distribution: &D, points: &[f64]) -> Vec<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    points.iter().map(|&x| distribution.cdf(x)).collect()
}

/// Evaluate the inverse CDF at each probability.
///
/// # Errors
///
/// Stops at the first point whose inversion fails to converge.
pub fn inv_cdf<D>(distribution: &D, points: &[f64]) -> StatsResult<Vec<f64>>
where
    D: ContinuousDistribution + ?Sized,
{
    points.iter().map(|&p| distribution.ppf(p)).collect()
}

/// Evaluate the density at each point.
pub fn weigh<D>(distribution: &D, points: &[f64]) -> Vec<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    points.iter().map(|&x| distribution.pdf(x)).collect()
}

/// Draw `count` independent samples.
pub fn sample<D, R>(distribution: &D, rng: &mut R, count: usize) -> Vec<f64>
where
    D: RandDistribution<f64> + ?Sized,
    R: Rng + ?Sized,
{
    (0..count).map(|_| distribution.sample(rng)).collect()
}
