//! tl-core: scalar foundation for the tickloop control toolkit.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors for time, frequency, angle)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
