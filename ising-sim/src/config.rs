use validator::{Validate, ValidationError};

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if !cfg.beta.is_finite() {
        return Err(ValidationError::new("beta must be finite"));
    }
    Ok(())
}

/// Parameters of a single simulation run.
///
/// `rows`/`cols` are fixed for the lifetime of a [`Simulator`](crate::Simulator);
/// only `beta` is reassigned (by the temperature sweep). Grid extents are checked
/// when the lattice is built.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    /// Inverse temperature.
    pub beta: f64,
    pub rows: usize,
    pub cols: usize,
    /// Seed of the run's PRNG.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            beta: 1.0,
            rows: 200,
            cols: 200,
            seed: 42,
        }
    }
}

fn validate_sweep_config(cfg: &SweepConfig) -> Result<(), ValidationError> {
    if cfg.temperatures.iter().any(|t| !t.is_finite()) {
        return Err(ValidationError::new("temperatures must be finite"));
    }
    Ok(())
}

/// Temperature schedule for [`Simulator::temperature_sweep`](crate::Simulator::temperature_sweep).
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sweep_config"))]
pub struct SweepConfig {
    /// Values assigned to `beta`, visited in order.
    pub temperatures: Vec<f64>,
    /// Full-lattice sweeps run at each temperature before sampling.
    pub equilibration_sweeps: usize,
}

impl SweepConfig {
    /// `n` evenly spaced temperatures from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, n: usize, equilibration_sweeps: usize) -> Self {
        let temperatures = match n {
            0 => vec![],
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            stop
                        } else {
                            start + i as f64 * step
                        }
                    })
                    .collect()
            }
        };
        Self {
            temperatures,
            equilibration_sweeps,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::linspace(0.1, 1.0, 10, 1000)
    }
}
