//! Discrete pseudo-differentiators.
//!
//! Two discretizations of `d/dt` for a fixed sample period:
//! - **Backward difference**: `(u[k] - u[k-1]) / Ts`, no filtering
//! - **Bilinear with low-pass**: Tustin discretization of `gpd·s / (s + gpd)`
//!
//! Both share one state record; a given instance should stick to one scheme.

use tl_core::Real;

/// Pseudo-differentiator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differentiator {
    /// Previous input.
    prev_input: Real,
    /// Previous output (bilinear scheme only).
    prev_output: Real,
    /// Sample period [s].
    ts: Real,
}

impl Differentiator {
    /// Create a differentiator with zeroed history.
    ///
    /// `ts` must be non-zero; it is not checked here (see
    /// [`SampleConfig`](crate::SampleConfig) for validation).
    pub fn new(ts: Real) -> Self {
        Self {
            prev_input: 0.0,
            prev_output: 0.0,
            ts,
        }
    }

    /// Backward difference without filtering.
    #[inline]
    pub fn backward_difference(&mut self, input: Real) -> Real {
        let y = (input - self.prev_input) / self.ts;
        self.prev_input = input;
        y
    }

    /// Bilinear (Tustin) derivative with first-order roll-off at `gpd` [rad/s].
    ///
    /// ```text
    /// y[k] = (2·gpd·(u[k] - u[k-1]) + (2 - Ts·gpd)·y[k-1]) / (2 + Ts·gpd)
    /// ```
    #[inline]
    pub fn bilinear(&mut self, input: Real, gpd: Real) -> Real {
        let y = (2.0 * gpd * (input - self.prev_input) + (2.0 - self.ts * gpd) * self.prev_output)
            / (2.0 + self.ts * gpd);

        self.prev_input = input;
        self.prev_output = y;
        y
    }

    /// Sample period [s].
    pub fn ts(&self) -> Real {
        self.ts
    }

    /// Zero the history, keeping the sample period.
    pub fn reset(&mut self) {
        *self = Self::new(self.ts);
    }
}
