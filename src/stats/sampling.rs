//! Random variate generation.
//!
//! Every distribution samples by inverse transform: a uniform draw
//! u ∈ [0, 1) is mapped through the quantile function.

use rand::Rng;
use rand::distr::Distribution as RandDistribution;

use super::continuous::{Beta, Normal, Uniform};

impl RandDistribution<f64> for Beta {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile(rng.random::<f64>())
    }
}

impl RandDistribution<f64> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Reject the single draw that maps to −∞
        loop {
            let u = rng.random::<f64>();
            if u > 0.0 {
                return self.quantile(u);
            }
        }
    }
}

impl RandDistribution<f64> for Uniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile(rng.random::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Distribution;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_mean<D: RandDistribution<f64>>(d: &D, n: usize) -> f64 {
        let mut rng = StdRng::seed_from_u64(0);
        (0..n).map(|_| d.sample(&mut rng)).sum::<f64>() / n as f64
    }

    #[test]
    fn test_beta_samples_in_support() {
        let d = Beta::new(0.5, 1.5, -2.0, 3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = d.sample(&mut rng);
            assert!((-2.0..=3.0).contains(&x), "x={}", x);
        }
    }

    #[test]
    fn test_sample_means() {
        let n = 20_000;

        let d = Beta::new(2.0, 5.0, 0.0, 7.0).unwrap();
        assert!((sample_mean(&d, n) - d.mean()).abs() < 0.05);

        let d = Normal::new(3.0, 2.0).unwrap();
        assert!((sample_mean(&d, n) - d.mean()).abs() < 0.1);

        let d = Uniform::new(-1.0, 1.0).unwrap();
        assert!((sample_mean(&d, n) - d.mean()).abs() < 0.02);
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let d = Beta::standard(2.0, 3.0).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(d.sample(&mut a), d.sample(&mut b));
        }
    }
}
