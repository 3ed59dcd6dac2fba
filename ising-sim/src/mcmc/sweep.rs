use crate::geometry::Lattice;
use rand::Rng;

/// Outcome of one trial flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub row: usize,
    pub col: usize,
    /// `2 * s * h`, the local energy cost of flipping the chosen spin.
    pub energy_cost: f64,
    pub accepted: bool,
}

/// Metropolis criterion: downhill moves always pass, otherwise accept with
/// probability `exp(-energy_cost * beta)`.
///
/// Exactly one uniform draw is consumed when `energy_cost >= 0`, none otherwise.
#[inline]
fn accept<R: Rng + ?Sized>(energy_cost: f64, beta: f64, rng: &mut R) -> bool {
    if energy_cost < 0.0 {
        return true;
    }
    rng.gen::<f64>() < (-energy_cost * beta).exp()
}

/// Single Metropolis trial on a cell chosen uniformly at random.
///
/// Draw order is row, column, then (only for uphill or flat moves) the acceptance
/// draw. Seeded runs depend on this order.
#[inline]
pub fn metropolis_step<R: Rng + ?Sized>(lattice: &mut Lattice, beta: f64, rng: &mut R) -> Trial {
    let row = rng.gen_range(0..lattice.rows());
    let col = rng.gen_range(0..lattice.cols());

    let h = lattice.neighbor_sum(row, col);
    let energy_cost = 2.0 * h * lattice.get(row, col) as f64;

    let accepted = accept(energy_cost, beta, rng);
    if accepted {
        lattice.flip(row, col);
    }

    Trial {
        row,
        col,
        energy_cost,
        accepted,
    }
}

/// One sweep: `rows * cols` trials with replacement. Returns the number of accepted
/// flips.
#[cfg_attr(feature = "profile", inline(never))]
pub fn metropolis_sweep<R: Rng + ?Sized>(lattice: &mut Lattice, beta: f64, rng: &mut R) -> usize {
    let n_spins = lattice.n_spins();
    let mut accepted = 0;
    for _ in 0..n_spins {
        if metropolis_step(lattice, beta, rng).accepted {
            accepted += 1;
        }
    }
    accepted
}
