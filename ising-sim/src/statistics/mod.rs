pub mod observables;
pub mod results;

pub use observables::{
    internal_energy, magnetic_susceptibility, magnetization, measure, specific_heat,
    specific_heat_scale, ObservableSample,
};
pub use results::{columns, SweepSample};
