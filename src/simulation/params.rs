//! Physical and numerical parameters for a ramp-and-roll run
//!
//! `Parameters` holds the runtime settings:
//! - body mass and gravitational acceleration,
//! - ramp angle and the two friction coefficients (ramp, floor),
//! - quadratic air-drag coefficient,
//! - integration step size and the floor distance abort bound
//!
//! No field is validated here, that is left to whoever fills it in
//! (see `Scenario::build`).

pub const DEFAULT_GRAVITY: f64 = 9.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub mass: f64, // body mass (kg)
    pub gravity: f64, // gravitational acceleration (m/s^2)
    pub ramp_angle: f64, // incline angle in degrees
    pub ramp_friction: f64, // friction coefficient on the ramp
    pub floor_friction: f64, // friction coefficient on the floor
    pub air_drag: f64, // quadratic drag coefficient c, F = c v^2
    pub dt: f64, // integration step (s)
    pub floor_limit: f64, // abort once floor position exceeds this (m)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: DEFAULT_GRAVITY,
            ramp_angle: 30.0,
            ramp_friction: 0.1,
            floor_friction: 0.1,
            air_drag: 0.002,
            dt: 0.001,
            floor_limit: 100.0,
        }
    }
}
