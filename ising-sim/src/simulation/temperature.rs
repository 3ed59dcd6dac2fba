use rand::Rng;
use tracing::{info, trace};
use validator::Validate;

use super::Simulator;
use crate::config::SweepConfig;
use crate::error::Result;
use crate::statistics::SweepSample;

impl<R: Rng> Simulator<R> {
    /// Susceptibility as a function of temperature.
    ///
    /// For each entry of `temperatures`, in order: rebuild a random lattice, set
    /// `beta` to the entry, run `equilibration_sweeps` sweeps and record
    /// [`magnetic_susceptibility`](Simulator::magnetic_susceptibility). `beta` is left
    /// at the last temperature.
    pub fn temperature_sweep(
        &mut self,
        temperatures: &[f64],
        equilibration_sweeps: usize,
    ) -> Result<Vec<SweepSample>> {
        let sweep = SweepConfig {
            temperatures: temperatures.to_vec(),
            equilibration_sweeps,
        };
        self.temperature_sweep_with_progress(&sweep, &|| {})
    }

    /// [`temperature_sweep`](Simulator::temperature_sweep) driven by a
    /// [`SweepConfig`]. `on_sweep` is called once per equilibration sweep (useful for
    /// progress bars).
    pub fn temperature_sweep_with_progress(
        &mut self,
        sweep: &SweepConfig,
        on_sweep: &dyn Fn(),
    ) -> Result<Vec<SweepSample>> {
        sweep.validate()?;

        let n_temps = sweep.temperatures.len();
        let mut samples = Vec::with_capacity(n_temps);

        for (temp_id, &temperature) in sweep.temperatures.iter().enumerate() {
            self.rebuild()?;
            self.config.beta = temperature;

            for sweep_id in 0..sweep.equilibration_sweeps {
                on_sweep();
                let accepted = self.sweep();
                trace!(temperature, sweep_id, accepted, "equilibration sweep");
            }

            let susceptibility = self.magnetic_susceptibility();
            info!(
                temperature,
                susceptibility,
                "temperature {}/{} done",
                temp_id + 1,
                n_temps
            );
            samples.push(SweepSample {
                temperature,
                susceptibility,
            });
        }

        Ok(samples)
    }
}
