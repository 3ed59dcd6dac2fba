//! 2D Ising model on a periodic lattice, evolved with single-spin Metropolis updates.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod statistics;

pub use config::{SimConfig, SweepConfig};
pub use constants::{PhysicalConstants, BOLTZMANN};
pub use error::{Error, Result};
pub use geometry::{Lattice, Snapshot};
pub use mcmc::Trial;
pub use simulation::Simulator;
pub use statistics::{ObservableSample, SweepSample};
