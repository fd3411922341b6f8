//! Fixed-period control building blocks for embedded real-time loops.
//!
//! Every component here is either a pure function of time or a small `Copy`
//! state record stepped once per control tick of period `Ts`. Nothing
//! allocates, blocks, or fails at step time; parameter checking is opt-in and
//! happens before the loop starts.
//!
//! # Components
//!
//! - **Waveforms**: square, triangle and staircase references
//! - **FRA**: swept-sine excitation for frequency response measurement
//! - **Limiter**: symmetric clamp, optionally reporting a [`Saturation`]
//! - **Differentiator / Integrator**: discrete `d/dt` and `∫dt`
//! - **PI controller**: Tustin PI with conditional anti-windup
//! - **Time counter**: tick count to elapsed time
//!
//! # Anti-windup wiring
//!
//! The limiter and the PI controller are coupled only through the
//! [`Saturation`] value the limiter produces:
//!
//! ```
//! use tl_controls::{PiController, PiGains, Saturation, clamp_with_feedback};
//!
//! let gains = PiGains::new(2.0, 20.0);
//! let mut pi = PiController::new(0.001);
//! let mut sat = Saturation::NONE;
//!
//! for _ in 0..1000 {
//!     let error = 1.0;
//!     let raw = pi.step(error, gains, sat);
//!     let command = clamp_with_feedback(&mut sat, raw, 5.0);
//!     assert!(command.abs() <= 5.0);
//! }
//! ```

pub mod controller;
pub mod differentiator;
pub mod error;
pub mod fra;
pub mod integrator;
pub mod limiter;
pub mod sampled;
pub mod waveform;

pub use controller::{LimitedPi, PiController, PiGains};
pub use differentiator::Differentiator;
pub use error::{ControlError, ControlResult};
pub use fra::{FraConfig, FraGenerator, FraPhase, FraSample};
pub use integrator::{IntegrationMethod, Integrator};
pub use limiter::{Saturation, clamp, clamp_with_feedback};
pub use sampled::{SampleConfig, TimeCounter};
pub use waveform::{StairsConfig, square_wave, stairs_wave, triangle_wave};
