//! Fixed-step discrete integrators.
//!
//! Three rules over the same two-sample history:
//! - **Forward Euler**: `y[k] = Ts·u[k-1] + y[k-1]` (left endpoint)
//! - **Backward Euler**: `y[k] = Ts·u[k] + y[k-1]` (right endpoint)
//! - **Trapezoidal**: `y[k] = Ts/2·(u[k] + u[k-1]) + y[k-1]` (Tustin)

use serde::{Deserialize, Serialize};
use tl_core::Real;

/// Integration rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    ForwardEuler,
    #[default]
    BackwardEuler,
    Trapezoidal,
}

impl IntegrationMethod {
    /// Numeric tag used by firmware parameter tables.
    pub const BACKWARD_EULER_TAG: i32 = 0;
    pub const FORWARD_EULER_TAG: i32 = 1;
    pub const TRAPEZOIDAL_TAG: i32 = 2;

    /// Decode a numeric tag.
    ///
    /// Unknown tags fall back to backward Euler instead of failing.
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            Self::BACKWARD_EULER_TAG => Self::BackwardEuler,
            Self::FORWARD_EULER_TAG => Self::ForwardEuler,
            Self::TRAPEZOIDAL_TAG => Self::Trapezoidal,
            other => {
                tracing::warn!(tag = other, "unknown integration method, using backward Euler");
                Self::BackwardEuler
            }
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            Self::BackwardEuler => Self::BACKWARD_EULER_TAG,
            Self::ForwardEuler => Self::FORWARD_EULER_TAG,
            Self::Trapezoidal => Self::TRAPEZOIDAL_TAG,
        }
    }
}

/// Discrete integrator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    prev_input: Real,
    prev_output: Real,
    ts: Real,
    method: IntegrationMethod,
}

impl Integrator {
    /// Create an integrator with zeroed history.
    pub fn new(ts: Real, method: IntegrationMethod) -> Self {
        Self {
            prev_input: 0.0,
            prev_output: 0.0,
            ts,
            method,
        }
    }

    /// Advance one sample and return the integral.
    #[inline]
    pub fn step(&mut self, input: Real) -> Real {
        let y = match self.method {
            IntegrationMethod::ForwardEuler => self.ts * self.prev_input + self.prev_output,
            IntegrationMethod::BackwardEuler => self.ts * input + self.prev_output,
            IntegrationMethod::Trapezoidal => {
                self.ts / 2.0 * (input + self.prev_input) + self.prev_output
            }
        };

        self.prev_input = input;
        self.prev_output = y;
        y
    }

    /// Last integral value.
    pub fn output(&self) -> Real {
        self.prev_output
    }

    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    pub fn ts(&self) -> Real {
        self.ts
    }

    /// Zero the history, keeping period and method.
    pub fn reset(&mut self) {
        *self = Self::new(self.ts, self.method);
    }
}
