use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::debug;
use validator::Validate;

use crate::config::SimConfig;
use crate::constants::PhysicalConstants;
use crate::error::Result;
use crate::geometry::{Lattice, Snapshot};
use crate::mcmc::{self, Trial};
use crate::statistics::{self, ObservableSample};

/// Mutable state for one simulation run.
///
/// Owns the run parameters, the current lattice and the PRNG every random decision
/// is drawn from: lattice construction, cell selection and acceptance. Two
/// simulators built from equal configs (or equally seeded generators) evolve
/// identically.
#[derive(Debug)]
pub struct Simulator<R = Xoshiro256StarStar> {
    pub(super) config: SimConfig,
    constants: PhysicalConstants,
    lattice: Lattice,
    rng: R,
}

impl Simulator<Xoshiro256StarStar> {
    /// Validate `config`, seed a generator from `config.seed` and build a random
    /// lattice from it.
    pub fn new(config: SimConfig) -> Result<Self> {
        let rng = Xoshiro256StarStar::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulator<R> {
    /// Like [`Simulator::new`] but draws from `rng`; `config.seed` is ignored.
    pub fn with_rng(config: SimConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let lattice = Lattice::build(config.rows, config.cols, &mut rng)?;
        Ok(Self {
            config,
            constants: PhysicalConstants::default(),
            lattice,
            rng,
        })
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn beta(&self) -> f64 {
        self.config.beta
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        let config = SimConfig {
            beta,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Direct access for seeding particular configurations. The extents cannot be
    /// changed through it.
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    /// Replace the lattice with a fresh random one of the same shape.
    pub fn rebuild(&mut self) -> Result<()> {
        self.lattice = Lattice::build(self.config.rows, self.config.cols, &mut self.rng)?;
        Ok(())
    }

    pub fn metropolis_step(&mut self) -> Trial {
        mcmc::metropolis_step(&mut self.lattice, self.config.beta, &mut self.rng)
    }

    /// `rows * cols` Metropolis steps. Returns the number of accepted flips.
    pub fn sweep(&mut self) -> usize {
        mcmc::metropolis_sweep(&mut self.lattice, self.config.beta, &mut self.rng)
    }

    /// Advance by one sweep and return the refreshed configuration.
    pub fn advance_frame(&mut self) -> Snapshot<'_> {
        let t0 = Instant::now();
        let accepted = self.sweep();
        debug!(
            elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0,
            accepted,
            n_spins = self.lattice.n_spins(),
            "frame advanced"
        );
        self.lattice.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.lattice.snapshot()
    }

    pub fn magnetization(&self) -> f64 {
        statistics::magnetization(&self.lattice)
    }

    pub fn magnetic_susceptibility(&self) -> f64 {
        statistics::magnetic_susceptibility(&self.lattice, self.config.beta, &self.constants)
    }

    pub fn internal_energy(&self) -> f64 {
        statistics::internal_energy(&self.lattice)
    }

    pub fn specific_heat(&self) -> f64 {
        statistics::specific_heat(&self.lattice, self.config.beta, &self.constants)
    }

    pub fn observables(&self) -> ObservableSample {
        statistics::measure(&self.lattice, self.config.beta, &self.constants)
    }
}
