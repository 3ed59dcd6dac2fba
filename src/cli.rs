use clap::Parser;
use ising_sim::{SimConfig, SweepConfig};

/// Metropolis Monte Carlo on a periodic 2D Ising lattice.
///
/// Runs a short animation (one sweep per frame) at fixed beta, then a
/// temperature sweep printed as `temperature,susceptibility` lines.
#[derive(Parser, Debug)]
#[command(name = "ising-mc", version, about, long_about = None)]
pub struct Cli {
    /// Lattice rows
    #[arg(long, default_value_t = 200)]
    pub rows: usize,

    /// Lattice columns
    #[arg(long, default_value_t = 200)]
    pub cols: usize,

    /// Inverse temperature for the animation frames
    #[arg(long, default_value_t = 1.0)]
    pub beta: f64,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of animation frames (one sweep each)
    #[arg(long, default_value_t = 10)]
    pub frames: usize,

    /// First temperature of the sweep
    #[arg(long, default_value_t = 0.1)]
    pub t_start: f64,

    /// Last temperature of the sweep
    #[arg(long, default_value_t = 1.0)]
    pub t_stop: f64,

    /// Number of temperature points
    #[arg(long, default_value_t = 10)]
    pub t_points: usize,

    /// Sweeps per temperature before sampling
    #[arg(long, default_value_t = 1000)]
    pub equilibration_sweeps: usize,

    /// Print every frame as text
    #[arg(long)]
    pub render: bool,

    /// Skip the animation frames
    #[arg(long)]
    pub no_animation: bool,

    /// Skip the temperature sweep
    #[arg(long)]
    pub no_sweep: bool,
}

impl Cli {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            beta: self.beta,
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
        }
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::linspace(
            self.t_start,
            self.t_stop,
            self.t_points,
            self.equilibration_sweeps,
        )
    }
}
