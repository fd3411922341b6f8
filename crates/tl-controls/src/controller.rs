//! Discrete PI controller with conditional anti-windup.
//!
//! The controller is the Tustin (bilinear) discretization of
//! `C(s) = Kp + Ki/s`:
//!
//! ```text
//! y[k] = (Kp + Ts·Ki/2)·u[k] + (Ts·Ki/2 - Kp)·u[k-1] + y[k-1]
//! ```
//!
//! Anti-windup is conditional integration: while the downstream limiter
//! reports a [`Saturation`], `Ki` is treated as zero so the integral stops
//! growing. The controller never clamps its own output; the caller feeds it
//! through [`clamp_with_feedback`] and passes the resulting saturation into
//! the next step. [`LimitedPi`] bundles that wiring.

use serde::{Deserialize, Serialize};
use tl_core::{Real, ensure_finite, ensure_non_negative};

use crate::error::ControlResult;
use crate::limiter::{Saturation, clamp_with_feedback};

/// PI gains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiGains {
    /// Proportional gain.
    pub kp: Real,
    /// Integral gain [1/s].
    pub ki: Real,
}

impl PiGains {
    pub fn new(kp: Real, ki: Real) -> Self {
        Self { kp, ki }
    }

    /// Check both gains are finite.
    pub fn validate(&self) -> ControlResult<()> {
        ensure_finite(self.kp, "kp")?;
        ensure_finite(self.ki, "ki")?;
        Ok(())
    }
}

/// PI controller state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiController {
    prev_input: Real,
    prev_output: Real,
    ts: Real,
}

impl PiController {
    /// Create a controller with zeroed history.
    pub fn new(ts: Real) -> Self {
        Self {
            prev_input: 0.0,
            prev_output: 0.0,
            ts,
        }
    }

    /// Compute one controller sample.
    ///
    /// # Arguments
    ///
    /// * `input` - Control error for this tick
    /// * `gains` - PI gains
    /// * `saturation` - Limiter state left by the previous tick
    #[inline]
    pub fn step(&mut self, input: Real, gains: PiGains, saturation: Saturation) -> Real {
        let ki = if saturation.is_saturated() {
            0.0
        } else {
            gains.ki
        };
        let half_ts_ki = self.ts * ki / 2.0;

        let y = (gains.kp + half_ts_ki) * input
            + (half_ts_ki - gains.kp) * self.prev_input
            + self.prev_output;

        self.prev_input = input;
        self.prev_output = y;
        y
    }

    /// Last (unclamped) controller output.
    pub fn output(&self) -> Real {
        self.prev_output
    }

    pub fn ts(&self) -> Real {
        self.ts
    }

    /// Zero the history, keeping the sample period.
    pub fn reset(&mut self) {
        *self = Self::new(self.ts);
    }
}

/// PI controller followed by a symmetric limiter, with the anti-windup
/// feedback wired between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitedPi {
    controller: PiController,
    saturation: Saturation,
    limit: Real,
}

impl LimitedPi {
    /// Create a limited controller.
    ///
    /// # Errors
    ///
    /// Returns error if `limit` is negative or not finite.
    pub fn new(ts: Real, limit: Real) -> ControlResult<Self> {
        let limit = ensure_non_negative(limit, "limit must be non-negative")?;
        Ok(Self {
            controller: PiController::new(ts),
            saturation: Saturation::NONE,
            limit,
        })
    }

    /// Controller step using last tick's saturation, then clamp.
    #[inline]
    pub fn step(&mut self, input: Real, gains: PiGains) -> Real {
        let raw = self.controller.step(input, gains, self.saturation);
        clamp_with_feedback(&mut self.saturation, raw, self.limit)
    }

    pub fn saturation(&self) -> Saturation {
        self.saturation
    }

    pub fn controller(&self) -> &PiController {
        &self.controller
    }

    pub fn limit(&self) -> Real {
        self.limit
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.saturation = Saturation::NONE;
    }
}
