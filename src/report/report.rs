//! Text summary and CSV export of a finished run
//!
//! Plotting lives outside this crate, these are what get handed to it:
//! a one-screen summary with the stopping distance and a
//! `time,velocity,position` CSV of the full series.

use std::fmt;
use std::io::{self, Write};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{TimeSeries, Termination, Trajectory};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub ramp_angle: f64,
    pub ramp_length: f64,
    pub termination: Termination,
    pub final_velocity: f64,
    pub stopping_distance: f64,
    pub total_time: f64,
    pub ramp_samples: usize,
    pub floor_samples: usize,
}

impl Summary {
    pub fn new(scenario: &Scenario, traj: &Trajectory) -> Self {
        let series = &traj.series;
        Self {
            ramp_angle: scenario.ramp_angle,
            ramp_length: scenario.ramp_length,
            termination: traj.termination,
            final_velocity: series.final_velocity().unwrap_or(0.0),
            stopping_distance: series.final_position().unwrap_or(-scenario.ramp_length),
            total_time: series.final_time().unwrap_or(0.0),
            ramp_samples: traj.ramp_samples(),
            floor_samples: traj.floor_samples(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.termination {
            Termination::Stopped => "stopped",
            Termination::BoundedAbort => "aborted at floor limit",
        };
        writeln!(f, "Angle (deg)        : {:.3}", self.ramp_angle)?;
        writeln!(f, "Ramp length (m)    : {:.3}", self.ramp_length)?;
        writeln!(f, "Result             : {end}")?;
        writeln!(f, "Final velocity     : {:.3} m/s", self.final_velocity)?;
        writeln!(f, "Total time         : {:.3} s", self.total_time)?;
        writeln!(f, "Samples            : {} ramp, {} floor", self.ramp_samples, self.floor_samples)?;
        write!(f, "Stopping distance  : {:.3} m", self.stopping_distance)
    }
}

/// Write `time,velocity,position` rows, one per sample
pub fn write_csv<W: Write>(mut out: W, series: &TimeSeries) -> io::Result<()> {
    writeln!(out, "time,velocity,position")?;
    for s in series.samples() {
        writeln!(out, "{},{},{}", s.t, s.v, s.s)?;
    }
    out.flush()
}
