//! Error type shared by the engine and the scenario builder

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Net driving force along the incline is not positive, the body never starts moving
    #[error("car cannot slide down: ramp friction is too large or slope is not steep enough (net driving term {net_force:.4} N)")]
    CannotSlide { net_force: f64 },

    /// Ramp geometry rejected before the engine is touched
    #[error("invalid ramp: {0}")]
    InvalidRamp(String),

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
