//! Error types for control component configuration.
//!
//! Step functions never fail; these errors only come out of the opt-in
//! parameter validation done before a loop starts.

use thiserror::Error;
use tl_core::CoreError;

/// Result type for control configuration.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors raised while validating control parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A parameter was NaN or infinite.
    #[error("Non-finite parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f32 },
}

impl From<CoreError> for ControlError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArg { what } => Self::InvalidArg { what },
            CoreError::NonFinite { what, value } => Self::NonFinite { what, value },
        }
    }
}
