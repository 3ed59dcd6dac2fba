use std::time::Instant;

use ising_sim::{SimConfig, Simulator};

const L: usize = 200;
const N_SWEEPS: usize = 50;
const BETAS: [f64; 3] = [0.2, 0.44, 1.0];

fn main() {
    println!("Lattice: {L}x{L}  |  Sweeps: {N_SWEEPS}  |  Betas: {BETAS:?}");
    println!("{}", "-".repeat(70));

    for &beta in &BETAS {
        let mut sim = Simulator::new(SimConfig {
            beta,
            rows: L,
            cols: L,
            seed: 42,
        })
        .expect("valid config");

        let t0 = Instant::now();
        let mut accepted = 0usize;
        for _ in 0..N_SWEEPS {
            accepted += sim.sweep();
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let per_sweep = elapsed / N_SWEEPS as f64 * 1000.0;
        let rate = accepted as f64 / (N_SWEEPS * L * L) as f64;
        println!(
            "beta {:.2}  |  {:.3} ms/sweep  |  acceptance {:.3}  |  m {:+.4}",
            beta,
            per_sweep,
            rate,
            sim.magnetization() / (L * L) as f64
        );
    }
}
