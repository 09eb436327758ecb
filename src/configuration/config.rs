//! Configuration types for loading ramp scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical and numerical parameters, all optional
//! - [`RampConfig`]       – ramp slope length, length unit and incline spec
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   mass: 1.0               # kg
//!   gravity: 9.8            # m/s^2
//!   ramp_friction: 0.1
//!   floor_friction: 0.1
//!   air_drag: 0.002         # c in F = c v^2
//!   dt: 0.001               # integration step (s)
//!   floor_limit: 100.0      # abort bound on the floor (m)
//!
//! ramp:
//!   length: 5.0             # slope length, in `unit`
//!   unit: m                 # m | cm | in
//!   incline:
//!     height: 2.5           # or `angle: 30.0` (degrees) or `width: 4.33`
//! ```
//!
//! `Scenario::build` turns this into a configured engine plus a ramp length in metres.

use serde::{Deserialize, Serialize};

use crate::simulation::params::Parameters;

/// Length unit used for the ramp geometry
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "m")]
    Meters,

    #[serde(rename = "cm")]
    Centimeters,

    #[serde(rename = "in", alias = "inches")]
    Inches,
}

impl LengthUnit {
    /// Multiply by this to get metres
    pub fn to_meters(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Inches => 0.0254,
        }
    }
}

/// How the incline is specified
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InclineConfig {
    Angle(f64), // degrees
    Height(f64), // vertical rise, same unit as the slope length
    Width(f64), // horizontal run, same unit as the slope length
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RampConfig {
    pub length: f64, // slope length in `unit`
    #[serde(default)]
    pub unit: LengthUnit,
    // `height: 30` map form rather than a `!height 30` tag
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub incline: InclineConfig,
}

/// Global parameters for a scenario, missing fields fall back to `Parameters::default()`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub mass: Option<f64>,
    pub gravity: Option<f64>,
    pub ramp_friction: Option<f64>,
    pub floor_friction: Option<f64>,
    pub air_drag: Option<f64>,
    pub dt: Option<f64>,
    pub floor_limit: Option<f64>,
}

impl ParametersConfig {
    /// Fill in a runtime `Parameters`, the angle is resolved later from the ramp geometry
    pub fn to_parameters(&self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            mass: self.mass.unwrap_or(d.mass),
            gravity: self.gravity.unwrap_or(d.gravity),
            ramp_angle: d.ramp_angle,
            ramp_friction: self.ramp_friction.unwrap_or(d.ramp_friction),
            floor_friction: self.floor_friction.unwrap_or(d.floor_friction),
            air_drag: self.air_drag.unwrap_or(d.air_drag),
            dt: self.dt.unwrap_or(d.dt),
            floor_limit: self.floor_limit.unwrap_or(d.floor_limit),
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub ramp: RampConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scenario() {
        let yaml = r#"
parameters:
  mass: 0.5
  air_drag: 0.0
ramp:
  length: 120
  unit: cm
  incline:
    height: 30
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.ramp.unit, LengthUnit::Centimeters);
        assert_eq!(cfg.ramp.incline, InclineConfig::Height(30.0));

        let p = cfg.parameters.to_parameters();
        assert_eq!(p.mass, 0.5);
        assert_eq!(p.air_drag, 0.0);
        assert_eq!(p.floor_friction, Parameters::default().floor_friction);
    }

    #[test]
    fn unit_and_parameters_are_optional() {
        let yaml = "ramp:\n  length: 5\n  incline:\n    angle: 30\n";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.ramp.unit, LengthUnit::Meters);
        assert_eq!(cfg.parameters.to_parameters(), Parameters::default());
    }

    #[test]
    fn inches_alias() {
        let yaml = "length: 10\nunit: inches\nincline:\n  width: 8\n";
        let ramp: RampConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ramp.unit, LengthUnit::Inches);
        assert_eq!(ramp.unit.to_meters(), 0.0254);
    }

    #[test]
    fn incline_map_form_for_every_variant() {
        for (yaml, expected) in [
            ("length: 5\nincline:\n  angle: 12.5\n", InclineConfig::Angle(12.5)),
            ("length: 5\nincline:\n  height: 3\n", InclineConfig::Height(3.0)),
            ("length: 5\nincline: { width: 4.0 }\n", InclineConfig::Width(4.0)),
        ] {
            let ramp: RampConfig = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(ramp.incline, expected);
        }
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let params = "ramp:\n  length: 5\n  incline:\n    angle: 30\nparameters:\n  floor_frction: 0.0\n";
        let err = serde_yaml::from_str::<ScenarioConfig>(params).unwrap_err();
        assert!(err.to_string().contains("floor_frction"), "{err}");

        let ramp = "ramp:\n  lenght: 5\n  incline:\n    angle: 30\n";
        assert!(serde_yaml::from_str::<ScenarioConfig>(ramp).is_err());
    }
}
