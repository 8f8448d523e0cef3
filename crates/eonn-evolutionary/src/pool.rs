// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Pools: ordered populations of organisms.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use rand::Rng;
use tracing::debug;

use crate::genome::Genome;
use crate::organism::{compare_fitness, Organism, DEFAULT_MUTATE_REPLACE};
use crate::types::{EvoError, EvoResult};

#[derive(Debug, Clone, Default)]
pub struct Pool {
    organisms: Vec<Organism>,
}

impl Pool {
    pub fn new(organisms: Vec<Organism>) -> Self {
        Self { organisms }
    }

    /// `size` organisms descended from `genome`
    ///
    /// The first organism carries the prototype unchanged; every other one
    /// is mutated with (`frac`, `std`) and the default replace probability.
    ///
    /// # Errors
    /// `InvalidArgument` if `size <= 1` or `std` is invalid.
    pub fn spawn<R: Rng + ?Sized>(
        genome: &Genome,
        size: usize,
        frac: f64,
        std: f64,
        rng: &mut R,
    ) -> EvoResult<Pool> {
        if size <= 1 {
            return Err(EvoError::InvalidArgument(format!(
                "pool size must be greater than 1, got {}",
                size
            )));
        }
        let prototype = Organism::new(genome.clone())?;
        let mut organisms = Vec::with_capacity(size);
        organisms.push(prototype.clone());
        for _ in 1..size {
            let mut organism = prototype.clone();
            organism.mutate(rng, frac, std, DEFAULT_MUTATE_REPLACE)?;
            organisms.push(organism);
        }
        debug!(size, signature = %genome.signature(), "pool spawned");
        Ok(Pool { organisms })
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Organism> {
        self.organisms.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    pub fn push(&mut self, organism: Organism) {
        self.organisms.push(organism);
    }

    /// Mean member fitness; NaN if the pool is empty or any member is unevaluated
    pub fn fitness(&self) -> f64 {
        if self.organisms.is_empty() {
            return f64::NAN;
        }
        self.organisms.iter().map(Organism::fitness).sum::<f64>() / self.organisms.len() as f64
    }

    /// Fittest organism, the earliest one on ties
    pub fn champion(&self) -> Option<&Organism> {
        self.organisms.iter().reduce(|best, candidate| {
            if candidate.cmp_fitness(best).is_gt() {
                candidate
            } else {
                best
            }
        })
    }

    /// `true` if every genome shares one topology
    pub fn is_homogeneous(&self) -> bool {
        let mut signatures = self.organisms.iter().map(|o| o.genome().signature());
        match signatures.next() {
            Some(first) => signatures.all(|s| s == first),
            None => true,
        }
    }

    /// Members ordered by descending fitness; equal fitness keeps pool order
    pub fn sorted_by_fitness(&self) -> Vec<&Organism> {
        let mut ranked: Vec<&Organism> = self.organisms.iter().collect();
        ranked.sort_by(|a, b| compare_fitness(b.fitness(), a.fitness()));
        ranked
    }
}

impl FromIterator<Organism> for Pool {
    fn from_iter<I: IntoIterator<Item = Organism>>(iter: I) -> Self {
        Pool::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter()
    }
}

impl<'a> IntoIterator for &'a mut Pool {
    type Item = &'a mut Organism;
    type IntoIter = std::slice::IterMut<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter_mut()
    }
}

impl IntoIterator for Pool {
    type Item = Organism;
    type IntoIter = std::vec::IntoIter<Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.into_iter()
    }
}
