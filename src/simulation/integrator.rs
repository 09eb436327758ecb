//! Fixed-step integrators for the two phases of a run
//!
//! - `ramp_phase` samples the closed-form ramp speed every `dt` until the
//!   body reaches the ramp base (s >= 0)
//! - `floor_phase` sheds kinetic energy step by step with
//!   `floor_deceleration_step` until the speed clamps to zero or the
//!   position passes `floor_limit`
//!
//! Both phases append to the same `TimeSeries` and advance the same clock.

use tracing::trace;

use super::forces::{air_drag_loss, friction_loss, kinetic_energy, ramp_velocity, velocity_from_energy};
use super::params::Parameters;
use super::states::{TimeSeries, Termination};
use crate::error::SimError;

/// Where the ramp phase left the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEnd {
    pub t: f64, // time of the last recorded sample
    pub v: f64, // last recorded speed
    pub s: f64, // last recorded position
}

/// One explicit energy-dissipation step on the floor.
///
/// Uses `ds = v dt` for both loss terms:
///   K' = 1/2 m v^2 - u_f m g ds - c v^2 ds
/// and returns `sqrt(2 K' / m)`, or exactly `0.0` once K' goes negative.
pub fn floor_deceleration_step(v: f64, params: &Parameters) -> f64 {
    let m = params.mass;
    let ds = v * params.dt;

    let k = kinetic_energy(m, v);
    let w_friction = friction_loss(params.floor_friction, m, params.gravity, ds);
    let w_drag = air_drag_loss(params.air_drag, v, ds);

    velocity_from_energy(m, k - w_friction - w_drag)
}

/// Closed-form descent from `s = -ramp_length` down to the ramp base.
///
/// Records `(t, v, s)` per step, where `s` already includes the step's
/// displacement. Returns `Ok(None)` when nothing was recorded (ramp length <= 0).
pub fn ramp_phase(ramp_length: f64, params: &Parameters, series: &mut TimeSeries) -> Result<Option<PhaseEnd>, SimError> {
    let dt = params.dt;
    let mut t = 0.0;
    let mut s = -ramp_length;
    let mut end = None;

    while s < 0.0 {
        let v = ramp_velocity(t, params.air_drag, params.mass, params.ramp_angle, params.ramp_friction, params.gravity)?;

        // Exact sentinel, only hit if the closed form underflows to zero after start
        if v == 0.0 && t > 0.0 {
            break;
        }

        s += v * dt;
        series.push(t, v, s);
        trace!(t, v, s, "ramp step");
        end = Some(PhaseEnd { t, v, s });
        t += dt;
    }

    Ok(end)
}

/// Iterative run-out on the floor starting from the ramp-phase end state
pub fn floor_phase(start: PhaseEnd, params: &Parameters, series: &mut TimeSeries) -> Termination {
    let dt = params.dt;
    let PhaseEnd { mut t, mut v, mut s } = start;

    while v > 0.0 {
        t += dt;
        let v_next = floor_deceleration_step(v, params);
        s += v_next * dt;
        series.push(t, v_next, s);
        trace!(t, v = v_next, s, "floor step");
        v = v_next;

        if s > params.floor_limit {
            return Termination::BoundedAbort;
        }
    }

    Termination::Stopped
}
