//! Sample period configuration and tick counting.
//!
//! Every stateful component assumes it is stepped once per fixed period `Ts`.
//! [`SampleConfig`] carries a validated period, and [`TimeCounter`] turns the
//! number of elapsed ticks into time.

use serde::{Deserialize, Serialize};
use tl_core::{Frequency, Real, Time, ensure_positive, hertz, seconds};

use crate::error::ControlResult;

/// Sample configuration for a control loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Sample period in seconds.
    pub ts: Real,
}

impl SampleConfig {
    /// Create a new sample configuration.
    ///
    /// # Arguments
    ///
    /// * `ts` - Sample period in seconds (must be positive and finite)
    pub fn new(ts: Real) -> ControlResult<Self> {
        let ts = ensure_positive(ts, "ts must be positive")?;
        Ok(Self { ts })
    }

    /// Create a sample configuration from a loop rate in Hz.
    pub fn from_frequency(freq_hz: Real) -> ControlResult<Self> {
        let freq_hz = ensure_positive(freq_hz, "loop frequency must be positive")?;
        Self::new(1.0 / freq_hz)
    }

    /// Create a sample configuration from a typed period.
    pub fn from_period(period: Time) -> ControlResult<Self> {
        Self::new(seconds(period))
    }

    /// Create a sample configuration from a typed loop rate.
    pub fn from_rate(rate: Frequency) -> ControlResult<Self> {
        Self::from_frequency(hertz(rate))
    }

    /// Get the sample frequency in Hz.
    pub fn frequency(&self) -> Real {
        1.0 / self.ts
    }
}

/// Counts control ticks and reports elapsed time.
///
/// `tick` reports the time of the tick *before* incrementing, so the first
/// call after construction returns `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeCounter {
    count: u64,
    time: Real,
}

impl TimeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick of period `ts` and return the elapsed time.
    ///
    /// The counter wraps at `u64::MAX`.
    #[inline]
    pub fn tick(&mut self, ts: Real) -> Real {
        self.time = self.count as Real * ts;
        self.count = self.count.wrapping_add(1);
        self.time
    }

    /// Ticks recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Elapsed time computed by the last `tick`.
    pub fn time(&self) -> Real {
        self.time
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nth_tick_is_n_times_ts(n in 0_u64..10_000, ts in 1e-4_f32..1.0_f32) {
            let mut counter = TimeCounter::new();
            let mut last = 0.0;
            for _ in 0..=n {
                last = counter.tick(ts);
            }
            prop_assert_eq!(last, n as f32 * ts);
            prop_assert_eq!(counter.count(), n + 1);
        }
    }
}
