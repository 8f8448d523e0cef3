// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Mountain Car Benchmark

Evolves a controller that drives an underpowered car out of a valley, then
replays the champion as an ASCII trace and prints its genome.

Usage:
  cargo run --release --bin mountain_car -- [--genome mc.net] [--epochs 100] [--seed 7]

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use anyhow::{Context, Result};
use clap::Parser;

use eonn::cli::RunArgs;
use eonn::evolutionary::{develop, optimize, templates, OptimizeOptions, Pool};
use eonn::neural::DEFAULT_MAX_SWEEPS;
use eonn::observability::debug_flags_help;
use eonn::tasks::mountain_car;

/// Evolve a mountain car controller
#[derive(Parser, Debug)]
#[command(name = "mountain_car", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    #[command(flatten)]
    run: RunArgs,

    /// Step limit of the replayed trace
    #[arg(long, default_value_t = mountain_car::MAX_STEPS)]
    max_steps: usize,

    /// Sweep bound per step of the replayed trace
    #[arg(long, default_value_t = DEFAULT_MAX_SWEEPS)]
    max_sweeps: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut setup = args
        .run
        .prepare(mountain_car::preset(), templates::load_mountain_car_genome)?;
    let config = &setup.config;

    println!("🧬 EONN mountain car benchmark (seed {})", setup.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let pool = Pool::spawn(
        &setup.genome,
        config.spawn.pool_size,
        config.spawn.frac,
        config.spawn.std,
        &mut setup.rng,
    )?;
    let mut fitness = mountain_car::fitness;
    let pool = optimize(
        pool,
        &mut fitness,
        &OptimizeOptions::from(&config.run),
        &config.evolution,
        &mut setup.rng,
    )?;

    let champion = pool.champion().context("final pool is empty")?;
    println!("\nchampion fitness: {}", champion);

    println!("\ntrace:");
    let mut network = develop(champion.genome())?.with_max_sweeps(args.max_sweeps);
    let episode = mountain_car::run(&mut network, args.max_steps, |state, action| {
        println!("{}", mountain_car::draw(state, action));
    })
    .context("genome does not fit the mountain car task")?;
    println!("total steps: {}", episode.steps);
    if network.unsettled_count() > 0 {
        println!(
            "⚠️  {} steps did not settle within {} sweeps",
            network.unsettled_count(),
            network.max_sweeps()
        );
    }

    println!("\ngenome:\n{}", champion.genome());

    if let Some(path) = &args.run.save {
        champion.genome().save(path)?;
        println!("💾 Champion saved to {}", path.display());
    }
    Ok(())
}
