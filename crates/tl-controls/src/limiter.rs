//! Saturation limiter with anti-windup feedback.
//!
//! [`clamp`] is the plain symmetric limiter. [`clamp_with_feedback`] also
//! records how far the input was pulled back as a [`Saturation`] value, which
//! the PI controller reads on its next step to suppress integral action.

use tl_core::Real;

/// Clamp error reported by the most recent limiter call.
///
/// `excess` is `clamped - input`: zero while the input is inside the limits,
/// negative when the upper limit cut it and positive when the lower limit did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Saturation {
    excess: Real,
}

impl Saturation {
    /// Limiter not engaged.
    pub const NONE: Self = Self { excess: 0.0 };

    /// Signed clamp error of the last limiter call.
    #[inline]
    pub fn excess(&self) -> Real {
        self.excess
    }

    /// True when the last limiter call changed its input.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.excess != 0.0
    }
}

/// Limit `input` to `[-limit, +limit]`.
///
/// `limit` must be non-negative. A negative limit is a caller error: the two
/// sequential tests then collapse every input onto `-limit`. It is not checked
/// and does not panic.
#[inline]
pub fn clamp(input: Real, limit: Real) -> Real {
    let mut y = input;
    if limit < y {
        y = limit;
    }
    if y < -limit {
        y = -limit;
    }
    y
}

/// [`clamp`] that also writes the clamp error into `feedback`.
#[inline]
pub fn clamp_with_feedback(feedback: &mut Saturation, input: Real, limit: Real) -> Real {
    let y = clamp(input, limit);
    feedback.excess = y - input;
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_basic() {
        assert_eq!(clamp(5.0, 3.0), 3.0);
        assert_eq!(clamp(-5.0, 3.0), -3.0);
        assert_eq!(clamp(2.0, 3.0), 2.0);
        assert_eq!(clamp(3.0, 3.0), 3.0);
    }

    #[test]
    fn zero_limit_pins_output() {
        assert_eq!(clamp(1.0, 0.0), 0.0);
        assert_eq!(clamp(-1.0, 0.0), 0.0);
    }

    #[test]
    fn negative_limit_is_degenerate_but_total() {
        assert_eq!(clamp(5.0, -2.0), 2.0);
        assert_eq!(clamp(-5.0, -2.0), 2.0);
        assert_eq!(clamp(0.0, -2.0), 2.0);
    }

    #[test]
    fn feedback_records_upper_excess() {
        let mut sat = Saturation::NONE;
        let y = clamp_with_feedback(&mut sat, 5.0, 3.0);
        assert_eq!(y, 3.0);
        assert_eq!(sat.excess(), -2.0);
        assert!(sat.is_saturated());
    }

    #[test]
    fn feedback_records_lower_excess() {
        let mut sat = Saturation::NONE;
        let y = clamp_with_feedback(&mut sat, -4.5, 3.0);
        assert_eq!(y, -3.0);
        assert_eq!(sat.excess(), 1.5);
    }

    #[test]
    fn feedback_clears_when_back_inside() {
        let mut sat = Saturation::NONE;
        clamp_with_feedback(&mut sat, 10.0, 1.0);
        assert!(sat.is_saturated());
        let y = clamp_with_feedback(&mut sat, 0.5, 1.0);
        assert_eq!(y, 0.5);
        assert_eq!(sat, Saturation::NONE);
        assert!(!sat.is_saturated());
    }
}
