//! Continuous probability distributions.

mod beta;
mod normal;
mod uniform;

pub use beta::Beta;
pub use normal::Normal;
pub use uniform::Uniform;

/// Normal-distribution helpers on top of `statrs`' error functions.
pub(crate) mod special {
    use statrs::function::erf;

    /// Standard normal PDF constant: 1/sqrt(2π)
    pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

    /// ln(sqrt(2π))
    pub const LN_SQRT_2PI: f64 = 0.9189385332046727;

    /// Standard normal CDF: Φ(z)
    pub fn norm_cdf(z: f64) -> f64 {
        0.5 * erf::erfc(-z / std::f64::consts::SQRT_2)
    }

    /// Standard normal quantile function: Φ⁻¹(p), for 0 < p < 1.
    ///
    /// The `erfc_inv` estimate is only good to ~1e-11, so it is polished with
    /// Halley steps on f(z) = Φ(z) − p, f' = φ(z), f'' = −z φ(z).
    pub fn norm_ppf(p: f64) -> f64 {
        let mut z = -std::f64::consts::SQRT_2 * erf::erfc_inv(2.0 * p);

        for _ in 0..3 {
            let density = INV_SQRT_2PI * (-0.5 * z * z).exp();
            let err = norm_cdf(z) - p;
            if err == 0.0 || density == 0.0 || !z.is_finite() {
                break;
            }

            let step = err / density;
            let halley = 1.0 + 0.5 * z * step;
            if halley.abs() > 0.5 {
                z -= step / halley;
            } else {
                z -= step;
            }
        }

        z
    }
}
