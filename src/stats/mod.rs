//! Probability distributions built on the [`special`](crate::special) kernels.
//!
//! Distributions expose scalar methods through [`Distribution`] and
//! [`ContinuousDistribution`]; [`batch`] evaluates any of them over a slice
//! of points.
//!
//! ```
//! use probr::stats::{batch, Beta};
//!
//! let d = Beta::new(1.0, 2.0, 3.0, 4.0).unwrap();
//! let x = batch::inv_cdf(&d, &[0.0, 0.5, 1.0]).unwrap();
//! assert_eq!(x[0], 3.0);
//! assert_eq!(x[2], 4.0);
//! ```
//!
//! Every distribution also implements `rand::distr::Distribution<f64>`:
//!
//! ```
//! use probr::stats::{batch, Normal};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let xs = batch::sample(&Normal::standard(), &mut rng, 10);
//! assert_eq!(xs.len(), 10);
//! ```

pub mod batch;
mod continuous;
mod distribution;
mod error;
mod sampling;

pub use continuous::{Beta, Normal, Uniform};
pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
