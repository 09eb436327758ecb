//! Output state of a simulation run.
//!
//! - `TimeSeries` : the three parallel sequences (velocity, position, time)
//! - `Sample`     : one row of a `TimeSeries`
//! - `Termination`: how the floor phase ended
//! - `Trajectory` : series + termination + phase boundary, returned by `run`

/// One recorded step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64, // time (s)
    pub v: f64, // speed along the path (m/s)
    pub s: f64, // signed position, negative on the ramp (m)
}

/// Velocity, position and time recorded by one run.
///
/// The three vectors are only ever extended together through [`TimeSeries::push`],
/// so they always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    velocity: Vec<f64>,
    position: Vec<f64>,
    time: Vec<f64>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, t: f64, v: f64, s: f64) {
        self.time.push(t);
        self.velocity.push(v);
        self.position.push(s);
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    pub fn positions(&self) -> &[f64] {
        &self.position
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn final_velocity(&self) -> Option<f64> {
        self.velocity.last().copied()
    }

    /// Last recorded position, i.e. the stopping distance measured from the ramp base
    pub fn final_position(&self) -> Option<f64> {
        self.position.last().copied()
    }

    pub fn final_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        Some(Sample {
            t: *self.time.get(i)?,
            v: *self.velocity.get(i)?,
            s: *self.position.get(i)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.time
            .iter()
            .zip(self.velocity.iter())
            .zip(self.position.iter())
            .map(|((&t, &v), &s)| Sample { t, v, s })
    }

    /// Consume the series into `(velocities, positions, times)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.velocity, self.position, self.time)
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Floor energy ran out and velocity clamped to exactly zero
    Stopped,
    /// Position passed the configured floor limit before the body stopped
    BoundedAbort,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub series: TimeSeries,
    pub termination: Termination,
    pub floor_start: usize, // index of the first floor-phase sample (== len when no floor phase ran)
}

impl Trajectory {
    pub fn velocities(&self) -> &[f64] {
        self.series.velocities()
    }

    pub fn positions(&self) -> &[f64] {
        self.series.positions()
    }

    pub fn times(&self) -> &[f64] {
        self.series.times()
    }

    pub fn stopping_distance(&self) -> Option<f64> {
        self.series.final_position()
    }

    pub fn ramp_samples(&self) -> usize {
        self.floor_start
    }

    pub fn floor_samples(&self) -> usize {
        self.series.len().saturating_sub(self.floor_start)
    }
}
