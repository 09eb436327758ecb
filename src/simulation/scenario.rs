//! Build a ready-to-run scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` containing:
//! - a `KinematicsEngine` with every parameter set,
//! - the resolved ramp angle (degrees) and slope length (metres)
//!
//! This is where input is validated and ramp geometry plus length units are
//! converted, so the engine itself only ever sees angles and metres.

use crate::configuration::config::{InclineConfig, RampConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::KinematicsEngine;
use crate::simulation::params::Parameters;
use crate::simulation::states::Trajectory;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: KinematicsEngine,
    pub ramp_angle: f64, // degrees
    pub ramp_length: f64, // metres
}

impl Scenario {
    pub fn build(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let (ramp_angle, ramp_length) = resolve_ramp(&cfg.ramp)?;

        let mut parameters = cfg.parameters.to_parameters();
        parameters.ramp_angle = ramp_angle;
        validate_parameters(&parameters)?;

        Ok(Self {
            engine: KinematicsEngine::new(parameters),
            ramp_angle,
            ramp_length,
        })
    }

    pub fn run(&self) -> Result<Trajectory, SimError> {
        self.engine.run(self.ramp_length)
    }
}

/// Convert the ramp spec into `(angle in degrees, slope length in metres)`.
///
/// Height and width are given in the same unit as the slope length, so the
/// unit only matters for the returned length.
pub fn resolve_ramp(ramp: &RampConfig) -> Result<(f64, f64), SimError> {
    let length = ramp.length;
    if !length.is_finite() || length <= 0.0 {
        return Err(SimError::InvalidRamp(format!(
            "slope length must be greater than zero, got {length}"
        )));
    }

    let angle = match ramp.incline {
        InclineConfig::Angle(deg) => {
            if !deg.is_finite() {
                return Err(SimError::InvalidRamp(format!("angle must be finite, got {deg}")));
            }
            deg
        }
        InclineConfig::Height(h) => {
            check_side("height", h, length)?;
            (h / length).asin().to_degrees()
        }
        InclineConfig::Width(w) => {
            check_side("width", w, length)?;
            (w / length).acos().to_degrees()
        }
    };

    Ok((angle, length * ramp.unit.to_meters()))
}

fn check_side(name: &str, value: f64, length: f64) -> Result<(), SimError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::InvalidRamp(format!("ramp {name} must be non-negative, got {value}")));
    }
    if value >= length {
        return Err(SimError::InvalidRamp(format!(
            "slope length ({length}) must be larger than ramp {name} ({value})"
        )));
    }
    Ok(())
}

/// Reject parameter sets the engine would loop on forever or turn into NaN
pub fn validate_parameters(p: &Parameters) -> Result<(), SimError> {
    let positive = [("mass", p.mass), ("gravity", p.gravity), ("dt", p.dt), ("floor_limit", p.floor_limit)];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(SimError::InvalidParameter { name, value });
        }
    }

    let non_negative = [
        ("ramp_friction", p.ramp_friction),
        ("floor_friction", p.floor_friction),
        ("air_drag", p.air_drag),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(SimError::InvalidParameter { name, value });
        }
    }

    if !p.ramp_angle.is_finite() {
        return Err(SimError::InvalidParameter { name: "ramp_angle", value: p.ramp_angle });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::LengthUnit;
    use approx::assert_relative_eq;

    fn ramp(length: f64, unit: LengthUnit, incline: InclineConfig) -> RampConfig {
        RampConfig { length, unit, incline }
    }

    #[test]
    fn height_gives_arcsine_angle() {
        let (angle, len) = resolve_ramp(&ramp(2.0, LengthUnit::Meters, InclineConfig::Height(1.0))).unwrap();
        assert_relative_eq!(angle, 30.0, epsilon = 1e-9);
        assert_relative_eq!(len, 2.0);
    }

    #[test]
    fn width_gives_arccosine_angle() {
        let (angle, _) = resolve_ramp(&ramp(2.0, LengthUnit::Meters, InclineConfig::Width(1.0))).unwrap();
        assert_relative_eq!(angle, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn units_only_scale_length() {
        let (angle_cm, len_cm) = resolve_ramp(&ramp(200.0, LengthUnit::Centimeters, InclineConfig::Height(100.0))).unwrap();
        assert_relative_eq!(angle_cm, 30.0, epsilon = 1e-9);
        assert_relative_eq!(len_cm, 2.0, epsilon = 1e-12);

        let (angle_in, len_in) = resolve_ramp(&ramp(100.0, LengthUnit::Inches, InclineConfig::Angle(15.0))).unwrap();
        assert_eq!(angle_in, 15.0);
        assert_relative_eq!(len_in, 2.54, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_geometry() {
        let bad = [
            ramp(0.0, LengthUnit::Meters, InclineConfig::Angle(30.0)),
            ramp(-1.0, LengthUnit::Meters, InclineConfig::Angle(30.0)),
            ramp(2.0, LengthUnit::Meters, InclineConfig::Height(2.0)),
            ramp(2.0, LengthUnit::Meters, InclineConfig::Width(3.0)),
            ramp(2.0, LengthUnit::Meters, InclineConfig::Height(-0.5)),
            ramp(f64::NAN, LengthUnit::Meters, InclineConfig::Angle(30.0)),
        ];
        for r in &bad {
            assert!(matches!(resolve_ramp(r), Err(SimError::InvalidRamp(_))), "{r:?}");
        }
    }

    #[test]
    fn rejects_non_positive_dt() {
        let p = Parameters { dt: 0.0, ..Parameters::default() };
        assert_eq!(validate_parameters(&p), Err(SimError::InvalidParameter { name: "dt", value: 0.0 }));
    }

    #[test]
    fn rejects_negative_coefficients() {
        let p = Parameters { air_drag: -0.1, ..Parameters::default() };
        assert_eq!(validate_parameters(&p), Err(SimError::InvalidParameter { name: "air_drag", value: -0.1 }));
        assert!(validate_parameters(&Parameters::default()).is_ok());
    }
}
