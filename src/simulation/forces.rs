//! Force and energy terms for the ramp-and-roll model
//!
//! Ramp phase: closed-form speed of a body on an incline with Coulomb friction
//! and quadratic drag, i.e. the solution of
//!
//! ```text
//! m dv/dt = k - c v^2,   k = m g (sin(theta) - u cos(theta))
//! ```
//!
//! Floor phase: per-step energy bookkeeping (kinetic energy, friction work,
//! drag work) used by the integrator to shed speed.

use crate::error::SimError;

/// Net driving force along the incline, k = m g (sin(theta) - u cos(theta))
/// `theta_deg` is in degrees
pub fn net_driving_term(m: f64, theta_deg: f64, u: f64, g: f64) -> f64 {
    let theta = theta_deg.to_radians();
    m * g * (theta.sin() - u * theta.cos())
}

/// Asymptotic ramp speed sqrt(k/c). `None` without drag (speed grows without bound)
pub fn terminal_velocity(k: f64, c: f64) -> Option<f64> {
    if c > 0.0 && k > 0.0 && (c / k).is_normal() {
        Some((k / c).sqrt())
    } else {
        None
    }
}

/// Speed on the ramp after `t` seconds, starting from rest.
///
/// With `a = 2 sqrt(c k) / m` and `b = c / k`:
/// - `c > 0`:  v(t) = tanh(a t / 2) / sqrt(b)
/// - `c == 0`: v(t) = (k / m) t
///
/// A drag so small that `b` underflows to a subnormal or zero is treated as `c == 0`.
///
/// Returns [`SimError::CannotSlide`] when `k <= 0`.
pub fn ramp_velocity(t: f64, c: f64, m: f64, theta_deg: f64, u: f64, g: f64) -> Result<f64, SimError> {
    let k = net_driving_term(m, theta_deg, u, g);
    if k <= 0.0 {
        return Err(SimError::CannotSlide { net_force: k });
    }

    let b = c / k;
    if c > 0.0 && b.is_normal() {
        let a = 2.0 * (c * k).sqrt() / m;
        // tanh(x) == (e^2x - 1) / (e^2x + 1), but stays finite for large x
        Ok((0.5 * a * t).tanh() / b.sqrt())
    } else {
        Ok((k / m) * t)
    }
}

/// K = 1/2 m v^2
pub fn kinetic_energy(m: f64, v: f64) -> f64 {
    0.5 * m * v * v
}

/// Work done against Coulomb friction over `ds`: W = u m g ds
pub fn friction_loss(u: f64, m: f64, g: f64, ds: f64) -> f64 {
    u * m * g * ds
}

/// Work done against quadratic drag over `ds`: W = c v^2 ds
pub fn air_drag_loss(c: f64, v: f64, ds: f64) -> f64 {
    c * v * v * ds
}

/// Invert K = 1/2 m v^2. Negative energy clamps to exactly zero speed
pub fn velocity_from_energy(m: f64, k: f64) -> f64 {
    if k < 0.0 {
        return 0.0;
    }
    (2.0 * k / m).sqrt()
}
