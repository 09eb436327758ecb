pub mod simulation;
pub mod configuration;
pub mod report;
pub mod benchmark;
pub mod error;

pub use simulation::states::{TimeSeries, Sample, Termination, Trajectory};
pub use simulation::params::{Parameters, DEFAULT_GRAVITY};
pub use simulation::engine::KinematicsEngine;
pub use simulation::forces::{net_driving_term, ramp_velocity, terminal_velocity};
pub use simulation::integrator::floor_deceleration_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, RampConfig, InclineConfig, LengthUnit};

pub use report::report::{Summary, write_csv};

pub use benchmark::benchmark::{bench_dt_curve, halving_steps};

pub use error::SimError;
