//! Kinematics engine: owns the parameters and drives a two-phase run
//!
//! construct -> configure (setters) -> `run(ramp_length)` -> discard.
//! `run` takes `&self`, so parameters cannot change while a run is in flight.

use tracing::{debug, info, warn};

use super::integrator::{floor_phase, ramp_phase};
use super::params::Parameters;
use super::states::{TimeSeries, Termination, Trajectory};
use crate::error::SimError;

#[derive(Debug, Clone, Default)]
pub struct KinematicsEngine {
    params: Parameters,
}

impl KinematicsEngine {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.params.mass = mass;
    }

    /// Ramp angle in degrees
    pub fn set_ramp_angle(&mut self, angle_deg: f64) {
        self.params.ramp_angle = angle_deg;
    }

    pub fn set_ramp_friction_coeff(&mut self, u: f64) {
        self.params.ramp_friction = u;
    }

    pub fn set_floor_friction_coeff(&mut self, u: f64) {
        self.params.floor_friction = u;
    }

    pub fn set_air_drag_coeff(&mut self, c: f64) {
        self.params.air_drag = c;
    }

    pub fn set_delta_t(&mut self, dt: f64) {
        self.params.dt = dt;
    }

    pub fn set_floor_limit(&mut self, floor_limit: f64) {
        self.params.floor_limit = floor_limit;
    }

    /// Slide down a ramp of `ramp_length` metres and roll out on the floor.
    ///
    /// Positions start at `-ramp_length` and cross zero at the ramp base.
    /// Fails with [`SimError::CannotSlide`] if the incline cannot overcome ramp
    /// friction; since that does not depend on time it fires before any sample
    /// is recorded.
    pub fn run(&self, ramp_length: f64) -> Result<Trajectory, SimError> {
        let params = &self.params;
        let mut series = TimeSeries::new();

        let ramp_end = match ramp_phase(ramp_length, params, &mut series) {
            Ok(end) => end,
            Err(e) => {
                warn!(angle = params.ramp_angle, friction = params.ramp_friction, "{e}");
                return Err(e);
            }
        };

        let floor_start = series.len();
        let Some(start) = ramp_end else {
            debug!(ramp_length, "nothing recorded on the ramp, skipping floor phase");
            return Ok(Trajectory { series, termination: Termination::Stopped, floor_start });
        };

        debug!(samples = floor_start, t = start.t, v = start.v, "ramp phase done");

        let termination = floor_phase(start, params, &mut series);
        let distance = series.final_position().unwrap_or(start.s);
        match termination {
            Termination::Stopped => info!(distance, samples = series.len(), "body stopped on the floor"),
            Termination::BoundedAbort => warn!(
                distance,
                floor_limit = params.floor_limit,
                "floor limit exceeded before the body stopped"
            ),
        }

        Ok(Trajectory { series, termination, floor_start })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Any slidable ramp with floor friction stops, with real speeds and forward-only motion
        #[test]
        fn prop_run_stops_with_monotone_position(
            theta in 20.0f64..60.0,
            u_r in 0.0f64..0.2,
            u_f in 0.05f64..0.5,
            c in 0.0f64..0.05,
            m in 0.1f64..5.0,
            ramp_length in 0.5f64..5.0,
        ) {
            let engine = KinematicsEngine::new(Parameters {
                mass: m,
                ramp_angle: theta,
                ramp_friction: u_r,
                floor_friction: u_f,
                air_drag: c,
                dt: 0.01,
                floor_limit: 1000.0,
                ..Parameters::default()
            });
            let traj = engine.run(ramp_length).unwrap();

            prop_assert_eq!(traj.termination, Termination::Stopped);
            prop_assert_eq!(traj.series.final_velocity(), Some(0.0));
            prop_assert!(traj.velocities().iter().all(|v| v.is_finite() && *v >= 0.0));
            prop_assert!(traj.positions().windows(2).all(|w| w[1] >= w[0]));
        }
    }
}
