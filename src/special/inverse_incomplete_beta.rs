//! Inverse of the regularized incomplete beta function.
//!
//! Solves I_x(α, β) = p for x. There is no closed form, so the solution is
//! found by a [`QuantileSearch`]: an analytic seed (AS 109) followed by a
//! Newton–Raphson iteration whose step is backed off until it stays inside
//! [0, 1] and does not grow from one iteration to the next.

use super::{InverseOptions, NonConvergence, PRECISION_FLOOR_RANGE, SEED_MARGIN, betainc};

/// Compute x such that I_x(α, β) = p.
///
/// Returns 0 for p ≤ 0 and 1 for p ≥ 1. `ln_beta` must be `ln B(α, β)`.
///
/// This is the infallible form used by samplers and batch evaluation: if the
/// refinement exhausts the default iteration budget, a warning is logged and
/// the last estimate is returned. Use [`betaincinv_with`] to observe the
/// failure instead.
pub fn betaincinv(p: f64, alpha: f64, beta: f64, ln_beta: f64) -> f64 {
    match betaincinv_with(p, alpha, beta, ln_beta, &InverseOptions::default()) {
        Ok(x) => x,
        Err(err) => {
            log::warn!(
                "betaincinv(p={}, alpha={}, beta={}): {}",
                p,
                alpha,
                beta,
                err
            );
            err.estimate
        }
    }
}

/// Compute x such that I_x(α, β) = p, with explicit refinement options.
///
/// # Errors
///
/// Returns [`NonConvergence`] when the Newton refinement does not settle
/// within `options.max_iter` iterations, or when the scaled residual stops
/// being finite. The error carries the last estimate, already mapped back
/// to the caller's (α, β) orientation.
///
/// For shapes well below 0.5 the iteration can stall at a fixed point that
/// is not the root (for example α = 0.05, β = 3, p = 1e-8 settles near
/// 1e-17 where I_x ≈ 0.15). That estimate is returned as `Ok`; check
/// `betainc` at the result when such shapes are possible.
pub fn betaincinv_with(
    p: f64,
    alpha: f64,
    beta: f64,
    ln_beta: f64,
    options: &InverseOptions,
) -> Result<f64, NonConvergence> {
    if p.is_nan() {
        return Ok(f64::NAN);
    }
    if p <= 0.0 {
        return Ok(0.0);
    }
    if p >= 1.0 {
        return Ok(1.0);
    }

    // Work in the lower half: I_x(α, β) = p  <=>  I_{1−x}(β, α) = 1 − p
    if p > 0.5 {
        return QuantileSearch::new(1.0 - p, beta, alpha, ln_beta, options)
            .run()
            .map(|x| 1.0 - x)
            .map_err(|err| NonConvergence {
                estimate: 1.0 - err.estimate,
                ..err
            });
    }

    QuantileSearch::new(p, alpha, beta, ln_beta, options).run()
}

/// Phase of a [`QuantileSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No estimate yet; the next step computes the analytic seed.
    Seeding,
    /// Newton iterations in progress.
    Refining,
    /// The estimate is final.
    Converged,
}

/// Newton–Raphson search for the root of I_x(α, β) − p.
///
/// The search is an explicit state machine. Each call to [`step`](Self::step)
/// performs one transition:
///
/// ```text
/// Seeding ──seed──▶ Refining ──newton──▶ Refining
///                      │
///                      └─────────────▶ Converged
/// ```
///
/// The residual is scaled by 1/f(x) (the reciprocal beta density), so the
/// Newton update is simply `x − y`. A step is accepted only if its square is
/// below the previous accepted square (reset whenever the residual changes
/// sign) and it stays inside [0, 1]; otherwise it is divided by 3 and retried.
///
/// Callers are expected to pass p ≤ 0.5; [`betaincinv_with`] reflects the
/// upper half onto it.
#[derive(Debug, Clone)]
pub struct QuantileSearch {
    p: f64,
    alpha: f64,
    beta: f64,
    ln_beta: f64,
    /// Current estimate
    x: f64,
    /// Square of the most recent trial step
    step_sq: f64,
    /// Upper bound on the square of the next accepted step
    bound: f64,
    /// Scaled residual of the previous iteration
    y_prev: f64,
    /// Smallest precision ever used
    floor: f64,
    /// Precision required to stop
    accuracy: f64,
    max_iter: usize,
    iterations: usize,
    phase: Phase,
}

impl QuantileSearch {
    /// Create a search for I_x(α, β) = p, 0 < p ≤ 0.5.
    pub fn new(p: f64, alpha: f64, beta: f64, ln_beta: f64, options: &InverseOptions) -> Self {
        let (lowest, highest) = PRECISION_FLOOR_RANGE;
        let precision_floor = options.precision_floor.clamp(lowest, highest);
        let floor = 10.0_f64.powi(precision_floor);

        // Tighter for small α and small p; truncation toward zero intended.
        let exponent = (-5.0 / alpha / alpha - 1.0 / p.powf(0.2) - 13.0) as i32;
        let accuracy = if exponent > precision_floor {
            10.0_f64.powi(exponent)
        } else {
            floor
        };

        Self {
            p,
            alpha,
            beta,
            ln_beta,
            x: f64::NAN,
            step_sq: 1.0,
            bound: 1.0,
            y_prev: 0.0,
            floor,
            accuracy,
            max_iter: options.max_iter,
            iterations: 0,
            phase: Phase::Seeding,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current estimate (`NaN` before seeding).
    pub fn estimate(&self) -> f64 {
        self.x
    }

    /// Newton iterations performed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Precision the search must reach before it stops.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Perform one transition and return the new phase.
    ///
    /// # Errors
    ///
    /// Returns [`NonConvergence`] if the iteration budget is spent or the
    /// scaled residual is not finite.
    pub fn step(&mut self) -> Result<Phase, NonConvergence> {
        self.phase = match self.phase {
            Phase::Seeding => {
                self.x = self.seed();
                log::trace!(
                    "betaincinv(p={}, alpha={}, beta={}): seed {}",
                    self.p,
                    self.alpha,
                    self.beta,
                    self.x
                );
                Phase::Refining
            }
            Phase::Refining => {
                if self.iterations >= self.max_iter {
                    return Err(self.failure());
                }
                self.iterations += 1;
                self.newton()?
            }
            Phase::Converged => Phase::Converged,
        };
        Ok(self.phase)
    }

    /// Drive the search to completion.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn run(mut self) -> Result<f64, NonConvergence> {
        while self.step()? != Phase::Converged {}
        log::trace!(
            "betaincinv(p={}, alpha={}, beta={}): {} after {} iterations",
            self.p,
            self.alpha,
            self.beta,
            self.x,
            self.iterations
        );
        Ok(self.x)
    }

    fn failure(&self) -> NonConvergence {
        NonConvergence {
            iterations: self.iterations,
            estimate: self.x,
        }
    }

    /// Initial approximation, kept within [1e-4, 1 − 1e-4].
    fn seed(&self) -> f64 {
        let (p, a, b) = (self.p, self.alpha, self.beta);

        // Hastings-type rational approximation of the normal quantile;
        // √(−2 ln p) rather than √(−ln p²), which underflows for tiny p
        let r = (-2.0 * p.ln()).sqrt();
        let y = r - (2.30753 + 0.27061 * r) / (1.0 + (0.99229 + 0.04481 * r) * r);

        let x = if a > 1.0 && b > 1.0 {
            let r = (y * y - 3.0) / 6.0;
            let s = 1.0 / (2.0 * a - 1.0);
            let t = 1.0 / (2.0 * b - 1.0);
            let h = 2.0 / (s + t);
            let w = y * (h + r).sqrt() / h - (t - s) * (r + 5.0 / 6.0 - 2.0 / (3.0 * h));
            a / (a + b * (2.0 * w).exp())
        } else {
            let t = 1.0 / (9.0 * b);
            let t = 2.0 * b * (1.0 - t + y * t.sqrt()).powi(3);
            if t <= 0.0 {
                1.0 - ((((1.0 - p) * b).ln() + self.ln_beta) / b).exp()
            } else {
                let t = 2.0 * (2.0 * a + b - 1.0) / t;
                if t <= 1.0 {
                    (((p * a).ln() + self.ln_beta) / a).exp()
                } else {
                    1.0 - 2.0 / (t + 1.0)
                }
            }
        };

        x.clamp(SEED_MARGIN, 1.0 - SEED_MARGIN)
    }

    /// One Newton iteration with step backoff.
    fn newton(&mut self) -> Result<Phase, NonConvergence> {
        let residual = betainc(self.x, self.alpha, self.beta, self.ln_beta) - self.p;
        if residual == 0.0 {
            return Ok(Phase::Converged);
        }

        let y = residual
            * (self.ln_beta
                + (1.0 - self.alpha) * self.x.ln()
                + (1.0 - self.beta) * (1.0 - self.x).ln())
            .exp();
        if !y.is_finite() {
            return Err(self.failure());
        }

        if y * self.y_prev <= 0.0 {
            self.bound = self.step_sq.max(self.floor);
        }

        let mut g = 1.0;
        let next = loop {
            let candidate = self.backoff(y, &mut g);

            if self.bound <= self.accuracy || y * y <= self.accuracy {
                self.x = candidate;
                return Ok(Phase::Converged);
            }
            if candidate != 0.0 && candidate != 1.0 {
                break candidate;
            }
            g /= 3.0;
        };

        if next == self.x {
            return Ok(Phase::Converged);
        }

        self.x = next;
        self.y_prev = y;
        Ok(Phase::Refining)
    }

    /// Shrink the step `g·y` until it is below the bound and lands in [0, 1].
    fn backoff(&mut self, y: f64, g: &mut f64) -> f64 {
        loop {
            let adj = *g * y;
            self.step_sq = adj * adj;
            if self.step_sq < self.bound {
                let candidate = self.x - adj;
                if (0.0..=1.0).contains(&candidate) {
                    return candidate;
                }
            }
            *g /= 3.0;
        }
    }
}
