// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Full runs of the XOR benchmark through the public API.

use eonn::prelude::*;
use eonn::evolutionary::templates::load_xor_genome;
use eonn::tasks::xor;

fn evolve(seed: u64, epochs: usize) -> Pool {
    let mut rng = seeded_rng(Some(seed));
    let config = xor::evolution_config();
    let pool = Pool::spawn(&load_xor_genome().unwrap(), xor::POOL_SIZE, 0.5, 0.5, &mut rng).unwrap();
    let options = OptimizeOptions {
        epochs,
        evals: 1,
        verbose: false,
    };
    let mut fitness = xor::fitness;
    optimize(pool, &mut fitness, &options, &config, &mut rng).unwrap()
}

#[test]
fn champion_learns_xor() {
    // Evolution is stochastic; a handful of independent seeds must include a solver
    let solved = (0..10u64).any(|seed| {
        let pool = evolve(seed, 200);
        let mut champion = pool.champion().unwrap().clone();
        xor::solves(champion.network_mut())
    });
    assert!(solved, "no seed produced an XOR solver in 200 epochs");
}

#[test]
fn same_seed_same_champion() {
    let a = evolve(42, 10);
    let b = evolve(42, 10);
    let champion_a = a.champion().unwrap();
    let champion_b = b.champion().unwrap();
    assert_eq!(champion_a.genome(), champion_b.genome());
    assert_eq!(champion_a.evals(), champion_b.evals());
}

#[test]
fn elitism_never_loses_the_best_score() {
    let mut rng = seeded_rng(Some(3));
    let pool = Pool::spawn(&load_xor_genome().unwrap(), 12, 0.5, 0.5, &mut rng).unwrap();
    let options = OptimizeOptions {
        epochs: 30,
        evals: 1,
        verbose: false,
    };
    let mut best = Vec::new();
    let mut fitness = xor::fitness;
    optimize_with_observer(
        pool,
        &mut fitness,
        &options,
        &xor::evolution_config(),
        &mut rng,
        |report| best.push(report.best_fitness),
    )
    .unwrap();

    assert_eq!(best.len(), 30);
    assert!(best.windows(2).all(|w| w[1] >= w[0]), "best fitness dropped: {:?}", best);
}

#[test]
fn champion_genome_survives_save_and_open() {
    let pool = evolve(5, 5);
    let champion = pool.champion().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xor_champion.net");
    champion.genome().save(&path).unwrap();
    let loaded = Genome::open(&path).unwrap();

    assert!(loaded.same_topology(champion.genome()));
    assert!(loaded.distance(champion.genome()).unwrap() <= 5e-5);
}
