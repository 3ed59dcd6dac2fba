use crate::constants::PhysicalConstants;
use crate::geometry::Lattice;

/// All four observables of one configuration at one `beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservableSample {
    pub magnetization: f64,
    pub susceptibility: f64,
    pub internal_energy: f64,
    pub specific_heat: f64,
}

/// Scale applied to the energy sums in [`specific_heat`]: `(1 / rows) * cols`,
/// evaluated in that order.
///
/// This is not the per-site average `1 / (rows * cols)`; the two differ whenever
/// `rows != cols` and also in floating-point rounding. Outputs of this model are
/// calibrated against this normalization, so it must not be changed to a per-site mean.
#[inline]
pub fn specific_heat_scale(rows: usize, cols: usize) -> f64 {
    (1.0 / rows as f64) * cols as f64
}

/// Sum of all spins, in `[-rows*cols, rows*cols]`.
pub fn magnetization(lattice: &Lattice) -> f64 {
    let mut sum = 0.0;
    for (i, j) in lattice.cells() {
        sum += lattice.get(i, j) as f64;
    }
    sum
}

/// `(sum s^2 - (sum s)^2) * beta / k_B` over a single configuration.
///
/// Both sums are accumulated in one row-major pass.
pub fn magnetic_susceptibility(lattice: &Lattice, beta: f64, constants: &PhysicalConstants) -> f64 {
    let mut m = 0.0;
    let mut m2 = 0.0;
    for (i, j) in lattice.cells() {
        let s = lattice.get(i, j) as f64;
        m += s;
        m2 += s * s;
    }
    (m2 - m * m) * (beta / constants.boltzmann)
}

/// Sum of [`Lattice::neighbor_sum`] over every cell.
///
/// Each bond is counted once from each endpoint and the total is not halved, so an
/// aligned `r x c` lattice gives `4 * r * c`.
pub fn internal_energy(lattice: &Lattice) -> f64 {
    let mut u = 0.0;
    for (i, j) in lattice.cells() {
        u += lattice.neighbor_sum(i, j);
    }
    u
}

/// `(U2 - U^2) * (1 / k_B) * beta` with `U = scale * sum e` and `U2 = scale * sum e^2`,
/// where `e` is the per-cell neighbor sum and `scale` is [`specific_heat_scale`].
pub fn specific_heat(lattice: &Lattice, beta: f64, constants: &PhysicalConstants) -> f64 {
    let mut e_sum = 0.0;
    let mut e2_sum = 0.0;
    for (i, j) in lattice.cells() {
        let e = lattice.neighbor_sum(i, j);
        e_sum += e;
        e2_sum += e * e;
    }
    let scale = specific_heat_scale(lattice.rows(), lattice.cols());
    let u = scale * e_sum;
    let u2 = scale * e2_sum;
    (u2 - u * u) * (1.0 / constants.boltzmann * beta)
}

pub fn measure(lattice: &Lattice, beta: f64, constants: &PhysicalConstants) -> ObservableSample {
    ObservableSample {
        magnetization: magnetization(lattice),
        susceptibility: magnetic_susceptibility(lattice, beta, constants),
        internal_energy: internal_energy(lattice),
        specific_heat: specific_heat(lattice, beta, constants),
    }
}
