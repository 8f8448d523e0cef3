// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Organisms: a genome, its network, and the fitness samples it collected.

The network is a pure function of the genome. Any change to the genome
rebuilds it from scratch, and a cloned organism gets its own freshly
developed network rather than a copy of the recurrent state.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::cmp::Ordering;
use std::fmt;

use eonn_neural::Network;
use rand::Rng;

use crate::embryogenesis::develop;
use crate::genome::Genome;
use crate::types::EvoResult;

/// Probability that a mutation replaces a value instead of perturbing it
pub const DEFAULT_MUTATE_REPLACE: f64 = 0.25;

#[derive(Debug)]
pub struct Organism {
    genome: Genome,
    network: Network,
    evals: Vec<f64>,
}

impl Organism {
    /// Take ownership of `genome` and develop its network
    pub fn new(genome: Genome) -> EvoResult<Self> {
        let network = develop(&genome)?;
        Ok(Self {
            genome,
            network,
            evals: Vec::new(),
        })
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Fitness samples, oldest first
    pub fn evals(&self) -> &[f64] {
        &self.evals
    }

    /// Offspring from crossing this organism's genome with `other`'s
    ///
    /// # Errors
    /// `TopologyMismatch` if the genomes differ structurally.
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Organism, rng: &mut R) -> EvoResult<Organism> {
        Organism::new(self.genome.crossover(&other.genome, rng)?)
    }

    /// Mutate the genome in place, then rebuild the network
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        frac: f64,
        std: f64,
        replace_prob: f64,
    ) -> EvoResult<()> {
        self.genome.mutate(rng, frac, std, replace_prob)?;
        self.network = develop(&self.genome)?;
        Ok(())
    }

    /// Record one fitness sample
    pub fn update(&mut self, score: f64) {
        self.evals.push(score);
    }

    /// Mean of the samples, NaN before the first one
    pub fn fitness(&self) -> f64 {
        if self.evals.is_empty() {
            return f64::NAN;
        }
        self.evals.iter().sum::<f64>() / self.evals.len() as f64
    }

    /// Total order on fitness, see [`compare_fitness`]
    pub fn cmp_fitness(&self, other: &Organism) -> Ordering {
        compare_fitness(self.fitness(), other.fitness())
    }
}

/// Total order on fitness values where NaN (not evaluated) ranks below everything
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    let rank = |f: f64| if f.is_nan() { f64::NEG_INFINITY } else { f };
    rank(a).partial_cmp(&rank(b)).unwrap_or(Ordering::Equal)
}

impl Clone for Organism {
    fn clone(&self) -> Self {
        let mut network = self.network.clone();
        network.reset();
        Self {
            genome: self.genome.clone(),
            network,
            evals: self.evals.clone(),
        }
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.fitness())
    }
}
