use std::time::Instant;

use tracing::warn;

use crate::simulation::scenario::Scenario;

/// One row of the dt sweep
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub dt: f64,
    pub samples: usize,
    pub ms: f64, // wall time of one run
    pub distance: f64, // stopping distance, NaN if the run failed
}

/// Time `Scenario::run` for each step size in `dts`
/// Paste output directly into a spreadsheet to graph cost and accuracy against dt
pub fn bench_dt_curve(scenario: &Scenario, dts: &[f64]) -> Vec<BenchRow> {
    println!("dt,samples,ms,distance");

    let mut rows = Vec::with_capacity(dts.len());
    for &dt in dts {
        let mut s = scenario.clone();
        s.engine.set_delta_t(dt);

        let t0 = Instant::now();
        let result = s.run();
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        let row = match result {
            Ok(traj) => BenchRow {
                dt,
                samples: traj.series.len(),
                ms,
                distance: traj.stopping_distance().unwrap_or(f64::NAN),
            },
            Err(e) => {
                warn!(dt, "{e}");
                BenchRow { dt, samples: 0, ms, distance: f64::NAN }
            }
        };

        println!("{},{},{:.6},{:.6}", row.dt, row.samples, row.ms, row.distance);
        rows.push(row);
    }
    rows
}

/// Step sizes from `coarse` down by factors of two, `n` values
pub fn halving_steps(coarse: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| coarse / 2f64.powi(i as i32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_steps_divide_by_two() {
        assert_eq!(halving_steps(0.1, 3), vec![0.1, 0.05, 0.025]);
    }
}
