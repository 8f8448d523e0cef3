// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
XOR Benchmark

Evolves the weights of a small sigmoid network until it computes exclusive-or,
then prints the champion's outputs and genome.

Usage:
  cargo run --release --bin xor -- [--genome xor.net] [--epochs 100] [--seed 7]

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use anyhow::{Context, Result};
use clap::Parser;

use eonn::cli::RunArgs;
use eonn::evolutionary::{optimize, templates, OptimizeOptions, Pool};
use eonn::observability::debug_flags_help;
use eonn::tasks::xor;

/// Evolve a network that computes XOR
#[derive(Parser, Debug)]
#[command(name = "xor", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut setup = args.run.prepare(xor::preset(), templates::load_xor_genome)?;
    let config = &setup.config;

    println!("🧬 EONN XOR benchmark (seed {})", setup.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let pool = Pool::spawn(
        &setup.genome,
        config.spawn.pool_size,
        config.spawn.frac,
        config.spawn.std,
        &mut setup.rng,
    )?;
    let mut fitness = xor::fitness;
    let pool = optimize(
        pool,
        &mut fitness,
        &OptimizeOptions::from(&config.run),
        &config.evolution,
        &mut setup.rng,
    )?;

    let mut champion = pool.champion().context("final pool is empty")?.clone();
    println!("\nchampion fitness: {}", champion);

    let output = champion
        .network()
        .output_ids()
        .first()
        .copied()
        .context("genome has no output neuron")?;
    println!("\n{} on each case:", output);
    let results = xor::replay(champion.network_mut()).context("genome does not fit the XOR task")?;
    for case in results {
        println!(
            "({}, {}) -> {:.4} ({})",
            case.inputs[0], case.inputs[1], case.output, case.rounded()
        );
    }

    println!("\ngenome:\n{}", champion.genome());

    if let Some(path) = &args.run.save {
        champion.genome().save(path)?;
        println!("💾 Champion saved to {}", path.display());
    }
    Ok(())
}
