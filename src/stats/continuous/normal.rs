//! Normal (Gaussian) distribution.

use super::special::{self, INV_SQRT_2PI, LN_SQRT_2PI};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Gaussian distribution N(μ, σ²).
///
/// f(x) = φ((x − μ)/σ) / σ,  F(x) = Φ((x − μ)/σ)
///
/// Φ comes from `erfc`; the quantile is an `erfc_inv` seed refined against Φ,
/// so `cdf(ppf(p))` reproduces p to within an ulp or two.
///
/// # Examples
///
/// ```
/// use probr::stats::{ContinuousDistribution, Distribution, Normal};
///
/// let n = Normal::standard();
/// assert!((n.pdf(0.0) - 0.3989422804).abs() < 1e-6);
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-10);
///
/// let n = Normal::new(100.0, 15.0).unwrap();
/// assert_eq!(n.mean(), 100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if sigma is not positive and finite, or mu is not finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if sigma <= 0.0 || !sigma.is_finite() {
            return Err(StatsError::invalid(
                "sigma",
                sigma,
                "must be positive and finite",
            ));
        }
        if !mu.is_finite() {
            return Err(StatsError::invalid("mu", mu, "must be finite"));
        }
        Ok(Self { mu, sigma })
    }

    /// Create a standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }

    /// Quantile with p clamped to [0, 1]; ±∞ at the ends.
    pub(crate) fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() {
            f64::NAN
        } else if p <= 0.0 {
            f64::NEG_INFINITY
        } else if p >= 1.0 {
            f64::INFINITY
        } else {
            self.mu + self.sigma * special::norm_ppf(p)
        }
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }

    fn entropy(&self) -> f64 {
        // ½ ln(2πeσ²)
        0.5 + LN_SQRT_2PI + self.sigma.ln()
    }

    fn median(&self) -> f64 {
        self.mu
    }

    fn mode(&self) -> f64 {
        self.mu
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        0.0
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI / self.sigma * (-0.5 * z * z).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -0.5 * z * z - LN_SQRT_2PI - self.sigma.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        // Upper tail by symmetry, no cancellation in 1 − Φ
        special::norm_cdf(-self.standardize(x))
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        Ok(self.quantile(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_creation() {
        let n = Normal::new(-1.0, 0.25).unwrap();
        assert_eq!((n.mu(), n.sigma()), (-1.0, 0.25));

        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
        assert!(Normal::new(0.0, f64::NAN).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());

        match Normal::new(0.0, -2.0) {
            Err(StatsError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "sigma");
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_normal_density() {
        let n = Normal::standard();
        assert!((n.pdf(0.0) - INV_SQRT_2PI).abs() < 1e-16);
        assert!((n.pdf(1.0) - 0.24197072451914337).abs() < 1e-16);
        assert_eq!(n.pdf(1.5), n.pdf(-1.5));

        // Scaling: N(3, 2) at μ + 2σ equals φ(2)/σ
        let n = Normal::new(3.0, 2.0).unwrap();
        assert!((n.pdf(7.0) - 0.05399096651318806 / 2.0).abs() < 1e-16);
        for x in [-2.0, 0.5, 3.0, 9.0] {
            assert!((n.log_pdf(x) - n.pdf(x).ln()).abs() < 1e-14);
        }
    }

    #[test]
    fn test_normal_cdf_tails() {
        let n = Normal::standard();
        assert_eq!(n.cdf(0.0), 0.5);
        assert!((n.cdf(-1.0) - 0.15865525393145707).abs() < 5e-16);
        // Lower tail keeps relative precision far out
        assert!((n.cdf(-10.0) / 7.619853024160527e-24 - 1.0).abs() < 1e-13);
        assert!((n.sf(10.0) / 7.619853024160527e-24 - 1.0).abs() < 1e-13);
        assert_eq!(n.cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(n.cdf(f64::INFINITY), 1.0);

        for x in [-3.0, -0.4, 0.0, 1.96] {
            assert!((n.sf(x) + n.cdf(x) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_normal_cdf_ppf_roundtrip() {
        let n = Normal::standard();
        let count = 1000;
        for i in 0..count {
            let p = i as f64 / (count - 1) as f64;
            let x = n.ppf(p).unwrap();
            assert!(
                (n.cdf(x) - p).abs() < 1e-15,
                "cdf(ppf({})) = {}",
                p,
                n.cdf(x)
            );
        }
    }

    #[test]
    fn test_normal_ppf() {
        let n = Normal::standard();
        assert_eq!(n.ppf(0.5).unwrap(), 0.0);
        assert!((n.ppf(0.975).unwrap() - 1.959963984540054).abs() < 1e-14);
        assert!((n.ppf(0.001).unwrap() + 3.090232306167813).abs() < 1e-14);
        assert!((n.ppf(0.3).unwrap() + n.ppf(0.7).unwrap()).abs() < 1e-15);

        // Far tail: seed is refined without overflowing the density
        let x = n.ppf(1e-300).unwrap();
        assert!(x.is_finite() && x < -37.0);
        assert!((n.cdf(x) / 1e-300 - 1.0).abs() < 1e-10);

        assert_eq!(n.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(n.ppf(-0.1).unwrap(), f64::NEG_INFINITY);
        assert_eq!(n.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(n.ppf(1.1).unwrap(), f64::INFINITY);
        assert!(n.ppf(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_normal_summary() {
        let n = Normal::new(5.0, 2.0).unwrap();
        assert_eq!(n.mean(), 5.0);
        assert_eq!(n.median(), 5.0);
        assert_eq!(n.mode(), 5.0);
        assert_eq!(n.var(), 4.0);
        assert_eq!(n.std(), 2.0);
        assert_eq!((n.skewness(), n.kurtosis()), (0.0, 0.0));

        // ½ ln(2πe) + ln σ
        assert!((Normal::standard().entropy() - 1.4189385332046727).abs() < 1e-15);
        assert!((n.entropy() - 1.4189385332046727 - 2.0_f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn test_normal_interval() {
        let n = Normal::new(-1.0, 0.25).unwrap();
        let (lo, hi) = n.interval(0.95).unwrap();
        assert!((lo + 1.0 + 0.25 * 1.959963984540054).abs() < 2e-15);
        assert!((hi + 1.0 - 0.25 * 1.959963984540054).abs() < 2e-15);
        assert!((n.cdf(hi) - n.cdf(lo) - 0.95).abs() < 1e-15);

        assert!(n.interval(-0.5).is_err());
        assert!(n.interval(1.5).is_err());
    }
}
