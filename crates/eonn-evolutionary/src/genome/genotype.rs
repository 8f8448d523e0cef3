// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The genome: an ordered, structurally keyed set of genes.

Genes are sorted by [`GeneKey`] on construction. Mutation only touches
trailing values, so the order (and the topology) never changes afterwards.
Crossover and distance align genes pairwise and therefore require both
genomes to share the exact same key sequence.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use eonn_neural::NeuronPosition;
use rand::Rng;
use tracing::trace;

use super::gene::{Gene, GeneKey, NeuronGene, SynapseGene};
use crate::random::{chance, gaussian};
use crate::types::{EvoError, EvoResult};
use crate::validator::structural_errors;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Genome {
    genes: Vec<Gene>,
}

impl Genome {
    /// Sort `genes` by structural key and wrap them
    ///
    /// # Errors
    /// `InvalidGenome` on duplicate keys, duplicate neuron ids, or a synapse
    /// that references an undeclared neuron.
    pub fn new(genes: impl IntoIterator<Item = Gene>) -> EvoResult<Self> {
        let mut genes: Vec<Gene> = genes.into_iter().collect();
        genes.sort_by_key(Gene::key);

        let errors = structural_errors(&genes);
        if !errors.is_empty() {
            return Err(EvoError::InvalidGenome(errors.join("; ")));
        }
        Ok(Self { genes })
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Structural key sequence, in gene order
    pub fn keys(&self) -> Vec<GeneKey> {
        self.genes.iter().map(Gene::key).collect()
    }

    /// `true` if both genomes have identical key sequences
    pub fn same_topology(&self, other: &Genome) -> bool {
        self.genes.len() == other.genes.len()
            && self
                .genes
                .iter()
                .zip(&other.genes)
                .all(|(a, b)| a.key() == b.key())
    }

    fn ensure_same_topology(&self, other: &Genome, operation: &str) -> EvoResult<()> {
        if self.same_topology(other) {
            return Ok(());
        }
        let first_difference = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(a, b)| (a.key(), b.key()))
            .find(|(a, b)| a != b);
        let detail = match first_difference {
            Some((a, b)) => format!("gene '{}' aligned with '{}'", a, b),
            None => format!("{} genes vs {} genes", self.genes.len(), other.genes.len()),
        };
        Err(EvoError::TopologyMismatch(format!(
            "{} requires identical topologies: {}",
            operation, detail
        )))
    }

    pub fn neurons(&self) -> impl Iterator<Item = &NeuronGene> {
        self.genes.iter().filter_map(|gene| match gene {
            Gene::Neuron(neuron) => Some(neuron),
            Gene::Synapse(_) => None,
        })
    }

    pub fn synapses(&self) -> impl Iterator<Item = &SynapseGene> {
        self.genes.iter().filter_map(|gene| match gene {
            Gene::Synapse(synapse) => Some(synapse),
            Gene::Neuron(_) => None,
        })
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons().count()
    }

    pub fn synapse_count(&self) -> usize {
        self.synapses().count()
    }

    pub fn count_by_position(&self, position: NeuronPosition) -> usize {
        self.neurons().filter(|n| n.position == position).count()
    }

    /// Mutate trailing values in place
    ///
    /// Every gene except input neurons is independently selected with
    /// probability `frac` and passed through [`Gene::mutate`] with
    /// (`std`, `replace_prob`).
    ///
    /// # Errors
    /// `InvalidArgument` if `std` is negative or not finite. The genome is
    /// left untouched in that case.
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        frac: f64,
        std: f64,
        replace_prob: f64,
    ) -> EvoResult<()> {
        let noise = gaussian(std)?;
        let mut mutated = 0usize;
        for gene in self.genes.iter_mut().filter(|g| !g.is_input_neuron()) {
            if chance(rng, frac) {
                gene.perturb(rng, &noise, replace_prob);
                mutated += 1;
            }
        }
        trace!(mutated, total = self.genes.len(), "genome mutated");
        Ok(())
    }

    /// Uniform/averaging crossover of two genomes with the same topology
    ///
    /// For each aligned pair of genes, a fair coin picks between the average
    /// of both values and a copy of one parent's gene (chosen by a second
    /// fair coin).
    ///
    /// # Errors
    /// `TopologyMismatch` if the key sequences differ.
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Genome, rng: &mut R) -> EvoResult<Genome> {
        self.ensure_same_topology(other, "crossover")?;
        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(mom, dad)| {
                if rng.gen::<bool>() {
                    mom.averaged(dad)
                } else if rng.gen::<bool>() {
                    mom.clone()
                } else {
                    dad.clone()
                }
            })
            .collect();
        // Keys are unchanged, so the child is as valid and sorted as its parents
        Ok(Genome { genes })
    }

    /// Mean absolute difference of trailing values, 0.0 for empty genomes
    ///
    /// # Errors
    /// `TopologyMismatch` if the key sequences differ.
    pub fn distance(&self, other: &Genome) -> EvoResult<f64> {
        self.ensure_same_topology(other, "distance")?;
        if self.genes.is_empty() {
            return Ok(0.0);
        }
        let total: f64 = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(a, b)| (a.value() - b.value()).abs())
            .sum();
        Ok(total / self.genes.len() as f64)
    }
}

impl<'a> IntoIterator for &'a Genome {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}
