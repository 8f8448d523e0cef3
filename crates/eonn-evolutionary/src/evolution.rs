// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The generational loop.

```text
spawn → evaluate → ┌ epoch: elites + tournament offspring ┐ → … → final pool
                   └──────────── evaluate ─────────────────┘
```

Every step takes its random generator and its [`EvolutionConfig`]
explicitly; there is no hidden global state.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use eonn_config::{EvolutionConfig, RunConfig};
use rand::Rng;
use tracing::{debug, error, info};

use crate::fitness::FitnessFunction;
use crate::organism::Organism;
use crate::pool::Pool;
use crate::random::chance;
use crate::types::{EvoError, EvoResult};

/// Run-level options of [`optimize`]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOptions {
    /// Generations to breed
    pub epochs: usize,
    /// Fitness samples per organism
    pub evals: usize,
    /// Log each epoch at `info` instead of `debug`
    pub verbose: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            epochs: 100,
            evals: 1,
            verbose: true,
        }
    }
}

impl From<&RunConfig> for OptimizeOptions {
    fn from(run: &RunConfig) -> Self {
        Self {
            epochs: run.epochs,
            evals: run.evals,
            verbose: run.verbose,
        }
    }
}

/// Summary handed to the observer after every epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// 1-based epoch number
    pub epoch: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

/// Score every organism until it holds `evals` samples
///
/// Organisms that already have enough samples (elites carried over from the
/// previous generation) are left alone.
pub fn evaluate<F>(pool: &mut Pool, fitness: &mut F, evals: usize)
where
    F: FitnessFunction + ?Sized,
{
    for organism in pool.iter_mut() {
        while organism.evals().len() < evals {
            let score = fitness.evaluate(organism.network_mut());
            organism.update(score);
        }
    }
}

/// Tournament selection
///
/// Draws `sample_size` organisms uniformly with replacement and returns the
/// fittest; the earliest draw wins ties.
///
/// # Errors
/// `InvalidArgument` for an empty pool or a zero sample size.
pub fn select<'a, R: Rng + ?Sized>(
    pool: &'a Pool,
    sample_size: usize,
    rng: &mut R,
) -> EvoResult<&'a Organism> {
    if pool.is_empty() {
        return Err(EvoError::InvalidArgument(
            "cannot select from an empty pool".to_string(),
        ));
    }
    if sample_size == 0 {
        return Err(EvoError::InvalidArgument(
            "tournament sample size must be at least 1".to_string(),
        ));
    }

    let mut winner: Option<&'a Organism> = None;
    for _ in 0..sample_size {
        let candidate = pool.get(rng.gen_range(0..pool.len()));
        winner = match (winner, candidate) {
            (Some(best), Some(challenger)) if challenger.cmp_fitness(best).is_gt() => {
                Some(challenger)
            }
            (None, challenger) => challenger,
            (best, _) => best,
        };
    }
    winner.ok_or_else(|| EvoError::InvalidArgument("tournament drew no organism".to_string()))
}

/// Offspring of `mom` and `dad`, mutated with probability `mutate_prob`
pub fn reproduce<R: Rng + ?Sized>(
    mom: &Organism,
    dad: &Organism,
    config: &EvolutionConfig,
    rng: &mut R,
) -> EvoResult<Organism> {
    let mut child = mom.crossover(dad, rng)?;
    if chance(rng, config.mutate_prob) {
        child.mutate(rng, config.mutate_frac, config.mutate_std, config.mutate_replace)?;
    }
    Ok(child)
}

/// Breed the next generation of `size` organisms
///
/// The `keep` fittest organisms are copied unchanged (evaluations included)
/// and come first; the remaining slots are filled with offspring of two
/// tournament winners each.
///
/// # Errors
/// `InvalidArgument` if `keep > size` or selection is impossible,
/// `TopologyMismatch` if two selected parents differ structurally.
pub fn epoch<R: Rng + ?Sized>(
    pool: &Pool,
    size: usize,
    config: &EvolutionConfig,
    rng: &mut R,
) -> EvoResult<Pool> {
    if config.keep > size {
        return Err(EvoError::InvalidArgument(format!(
            "cannot keep {} elites in a pool of {}",
            config.keep, size
        )));
    }

    let mut next: Vec<Organism> = pool
        .sorted_by_fitness()
        .into_iter()
        .take(config.keep)
        .cloned()
        .collect();

    while next.len() < size {
        let mom = select(pool, config.sample_size, rng)?;
        let dad = select(pool, config.sample_size, rng)?;
        next.push(reproduce(mom, dad, config, rng)?);
    }
    Ok(Pool::new(next))
}

/// Evolve `pool` for `options.epochs` generations and return the final pool
pub fn optimize<F, R>(
    pool: Pool,
    fitness: &mut F,
    options: &OptimizeOptions,
    config: &EvolutionConfig,
    rng: &mut R,
) -> EvoResult<Pool>
where
    F: FitnessFunction + ?Sized,
    R: Rng + ?Sized,
{
    optimize_with_observer(pool, fitness, options, config, rng, |_| {})
}

/// [`optimize`], calling `observer` after every epoch
///
/// # Errors
/// `InvalidArgument` for zero `evals` or an empty pool; `TopologyMismatch`
/// if the pool mixes topologies. Any error aborts the run.
pub fn optimize_with_observer<F, R, O>(
    mut pool: Pool,
    fitness: &mut F,
    options: &OptimizeOptions,
    config: &EvolutionConfig,
    rng: &mut R,
    mut observer: O,
) -> EvoResult<Pool>
where
    F: FitnessFunction + ?Sized,
    R: Rng + ?Sized,
    O: FnMut(&EpochReport),
{
    if options.evals == 0 {
        return Err(EvoError::InvalidArgument(
            "each organism needs at least one evaluation".to_string(),
        ));
    }
    if pool.is_empty() {
        return Err(EvoError::InvalidArgument("cannot optimize an empty pool".to_string()));
    }
    if !pool.is_homogeneous() {
        error!("pool mixes genome topologies, aborting run");
        return Err(EvoError::TopologyMismatch(
            "pool members do not share one topology".to_string(),
        ));
    }

    let size = pool.len();
    debug!(
        size,
        epochs = options.epochs,
        evals = options.evals,
        sample_size = config.sample_size,
        keep = config.keep,
        "optimization started"
    );

    evaluate(&mut pool, fitness, options.evals);
    for generation in 1..=options.epochs {
        pool = epoch(&pool, size, config, rng)?;
        evaluate(&mut pool, fitness, options.evals);

        let report = EpochReport {
            epoch: generation,
            best_fitness: pool.champion().map_or(f64::NAN, Organism::fitness),
            mean_fitness: pool.fitness(),
        };
        if options.verbose {
            info!(
                epoch = report.epoch,
                best = report.best_fitness,
                mean = report.mean_fitness,
                "epoch complete"
            );
        } else {
            debug!(
                epoch = report.epoch,
                best = report.best_fitness,
                mean = report.mean_fitness,
                "epoch complete"
            );
        }
        observer(&report);
    }
    Ok(pool)
}
