use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising_sim::{statistics, Simulator};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod render;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let mut sim = Simulator::new(cli.sim_config()).context("failed to set up simulation")?;

    if !cli.no_animation {
        for frame_id in 0..cli.frames {
            let snapshot = sim.advance_frame();
            if cli.render {
                print!("{}", render::frame(&snapshot));
                println!();
            }
            let obs = sim.observables();
            info!(
                frame = frame_id + 1,
                magnetization = obs.magnetization,
                internal_energy = obs.internal_energy,
                specific_heat = obs.specific_heat,
                "frame"
            );
        }
    }

    if !cli.no_sweep {
        let sweep = cli.sweep_config();
        let total = (sweep.temperatures.len() * sweep.equilibration_sweeps) as u64;

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
            )
            .context("invalid progress template")?
            .progress_chars("=> "),
        );
        pb.set_message("sweeps");

        let samples = sim
            .temperature_sweep_with_progress(&sweep, &|| pb.inc(1))
            .context("temperature sweep failed")?;
        pb.finish_and_clear();

        let (temps, chis) = statistics::columns(&samples);
        println!("temperature,susceptibility");
        for (t, chi) in temps.iter().zip(chis.iter()) {
            println!("{t},{chi:e}");
        }
    }

    Ok(())
}
