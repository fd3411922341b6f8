//! Swept-sine excitation for frequency response analysis (FRA).
//!
//! The generator outputs `amplitude·cos(2π·f·τ) + bias`, where `τ` is the time
//! since the current frequency segment started. After `cycles` full periods at
//! `f` the frequency steps up by `fstep`. Once a segment above `fmax` has
//! completed, the sweep finishes and only the bias is emitted.
//!
//! ```text
//!   Waiting ──(time >= start_time)──▶ Sweeping ──(segment done, f > fmax)──▶ Finished
//! ```
//!
//! `Finished` is sticky until [`FraGenerator::reset`].

use serde::{Deserialize, Serialize};
use tl_core::{Real, ensure_finite, ensure_positive};

use crate::error::ControlResult;

/// Sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraConfig {
    /// Starting frequency [Hz]. Must be positive.
    pub fmin: Real,
    /// Last frequency to be swept [Hz].
    pub fmax: Real,
    /// Frequency increment between segments [Hz].
    pub fstep: Real,
    /// Number of full periods emitted at each frequency.
    pub cycles: Real,
    /// Excitation amplitude.
    pub amplitude: Real,
    /// Offset added to the excitation, and the output outside the sweep.
    pub bias: Real,
    /// Time at which the sweep starts [s].
    pub start_time: Real,
}

impl FraConfig {
    /// Check the sweep is well formed.
    ///
    /// [`FraGenerator::step`] divides by the current frequency and never checks
    /// it, so this is the place to reject a non-positive `fmin`.
    pub fn validate(&self) -> ControlResult<()> {
        ensure_positive(self.fmin, "fmin must be positive")?;
        ensure_finite(self.fmax, "fmax")?;
        ensure_positive(self.fstep, "fstep must be positive")?;
        ensure_positive(self.cycles, "cycles must be positive")?;
        ensure_finite(self.amplitude, "amplitude")?;
        ensure_finite(self.bias, "bias")?;
        ensure_finite(self.start_time, "start_time")?;
        Ok(())
    }
}

/// Where the sweep is at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraPhase {
    /// Before `start_time`.
    Waiting,
    /// Emitting the swept cosine.
    Sweeping,
    /// Sweep completed.
    Finished,
}

/// One generator output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FraSample {
    /// Excitation signal.
    pub signal: Real,
    /// Current sweep frequency [Hz], after any advance made by this step.
    pub frequency: Real,
}

/// Swept-sine generator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FraGenerator {
    config: FraConfig,
    is_end: bool,
    /// Current frequency [Hz].
    f: Real,
    /// Start of the current segment, relative to `start_time` [s].
    tini: Real,
}

impl FraGenerator {
    pub fn new(config: FraConfig) -> Self {
        Self {
            config,
            is_end: false,
            f: config.fmin,
            tini: 0.0,
        }
    }

    /// Produce the excitation for `time` and advance the sweep.
    pub fn step(&mut self, time: Real) -> FraSample {
        let c = &self.config;
        let mut signal = c.bias;

        if time >= c.start_time && !self.is_end {
            let elapsed = time - self.tini - c.start_time;
            let arg = core::f64::consts::TAU * self.f as f64 * elapsed as f64;
            signal = c.amplitude * arg.cos() as Real + c.bias;

            if c.cycles / self.f <= elapsed {
                if self.f <= c.fmax {
                    self.tini = time - c.start_time;
                    self.f += c.fstep;
                    tracing::debug!(time, frequency = self.f, "fra segment advanced");
                } else {
                    self.is_end = true;
                    tracing::debug!(time, frequency = self.f, "fra sweep finished");
                }
            }
        }

        FraSample {
            signal,
            frequency: self.f,
        }
    }

    /// Sweep state as seen at `time`.
    pub fn phase(&self, time: Real) -> FraPhase {
        if self.is_end {
            FraPhase::Finished
        } else if time >= self.config.start_time {
            FraPhase::Sweeping
        } else {
            FraPhase::Waiting
        }
    }

    pub fn is_finished(&self) -> bool {
        self.is_end
    }

    /// Current sweep frequency [Hz].
    pub fn frequency(&self) -> Real {
        self.f
    }

    pub fn config(&self) -> &FraConfig {
        &self.config
    }

    /// Restart the sweep from `fmin`.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}
