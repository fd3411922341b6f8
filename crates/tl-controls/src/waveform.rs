//! Test waveforms as pure functions of time.
//!
//! Used as references and disturbances for exercising a control loop:
//! - **Square**: `±1` following the sign of a sine
//! - **Triangle**: linear ramps between `-1` and `+1`
//! - **Stairs**: a finite staircase of equal steps

use serde::{Deserialize, Serialize};
use tl_core::{Real, ensure_finite, ensure_non_negative, ensure_positive};

use crate::error::ControlResult;

/// Square wave of amplitude 1.
///
/// Returns `+1.0` where `sin(2π·freq·time + phase) >= 0`, otherwise `-1.0`.
/// Zero crossings therefore read `+1.0`, and a NaN argument reads `-1.0`.
///
/// # Arguments
///
/// * `freq` - Frequency [Hz]
/// * `phase` - Phase offset [rad]
/// * `time` - Time [s]
#[inline]
pub fn square_wave(freq: Real, phase: Real, time: Real) -> Real {
    // Phase argument in double precision so long-running loops keep clean edges.
    let r = (core::f64::consts::TAU * freq as f64 * time as f64 + phase as f64).sin();
    if r >= 0.0 { 1.0 } else { -1.0 }
}

/// Triangle wave in `[-1, +1]` with period `1/freq`.
///
/// Starts at `-1` on each period boundary, peaks at `+1` half way through.
/// Time is folded with `%` (sign follows `time`), so negative times fall
/// outside the `[-1, +1]` band.
#[inline]
pub fn triangle_wave(freq: Real, time: Real) -> Real {
    let tp = 1.0 / freq;
    let slope = 2.0 / tp;
    let t = time % tp;

    let y = if (0.0..tp / 2.0).contains(&t) {
        slope * t
    } else {
        -slope * t + 2.0
    };

    2.0 * y - 1.0
}

/// Staircase of `nstp + 1` plateaus starting at `tini`.
///
/// The current step is `n = floor((time - tini) / tstp)` and the output is
/// `ystp * n` while `n <= nstp`. Once the staircase is exhausted the output
/// drops back to `0.0` rather than holding the top step.
#[inline]
pub fn stairs_wave(time: Real, tini: Real, ystp: Real, tstp: Real, nstp: Real) -> Real {
    let n = ((time - tini) / tstp).floor();
    if n <= nstp { ystp * n } else { 0.0 }
}

/// Staircase parameters, for loops that configure the waveform once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairsConfig {
    /// Start time of the first step [s].
    pub tini: Real,
    /// Height of one step.
    pub ystp: Real,
    /// Duration of one step [s].
    pub tstp: Real,
    /// Index of the last step before the output drops to zero.
    pub nstp: Real,
}

impl StairsConfig {
    /// Check that the staircase is well formed.
    pub fn validate(&self) -> ControlResult<()> {
        ensure_finite(self.tini, "tini")?;
        ensure_finite(self.ystp, "ystp")?;
        ensure_positive(self.tstp, "tstp must be positive")?;
        ensure_non_negative(self.nstp, "nstp must be non-negative")?;
        Ok(())
    }

    /// Staircase output at `time`.
    #[inline]
    pub fn sample(&self, time: Real) -> Real {
        stairs_wave(time, self.tini, self.ystp, self.tstp, self.nstp)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn square_is_unit_magnitude(freq in 0.01_f32..100.0, phase in -10.0_f32..10.0, t in 0.0_f32..100.0) {
            prop_assert_eq!(square_wave(freq, phase, t).abs(), 1.0);
        }

        #[test]
        fn triangle_is_bounded(freq in 0.1_f32..50.0, t in 0.0_f32..100.0) {
            let y = triangle_wave(freq, t);
            prop_assert!((-1.0 - 1e-4..=1.0 + 1e-4).contains(&y), "y = {}", y);
        }

        #[test]
        fn triangle_is_periodic(freq in 0.1_f32..10.0, t in 0.0_f32..10.0) {
            let period = 1.0 / freq;
            let a = triangle_wave(freq, t);
            let b = triangle_wave(freq, t + period);
            prop_assert!((a - b).abs() < 1e-3, "a = {}, b = {}", a, b);
        }
    }
}
