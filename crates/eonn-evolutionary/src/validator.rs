// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome validation for EONN.

Structural errors (duplicate keys, duplicate neuron ids, dangling synapses)
make a gene set unusable and are rejected by [`Genome::new`]. Warnings flag
genomes that are well formed but probably not what the author meant.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::collections::HashSet;

use eonn_neural::{NeuronId, NeuronPosition};

use crate::genome::{Gene, Genome};

/// Validation result
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the genome is valid
    pub valid: bool,
    /// List of errors (blocking issues)
    pub errors: Vec<String>,
    /// List of warnings (non-blocking issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a new valid result
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, error: String) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a genome
pub fn validate_genome(genome: &Genome) -> ValidationResult {
    validate_genes(genome.genes())
}

/// Validate an arbitrary gene set, before it is turned into a [`Genome`]
pub fn validate_genes(genes: &[Gene]) -> ValidationResult {
    let mut result = ValidationResult::new();
    for error in structural_errors(genes) {
        result.add_error(error);
    }
    check_io_layout(genes, &mut result);
    result
}

/// Blocking problems of a gene set, in gene order
pub(crate) fn structural_errors(genes: &[Gene]) -> Vec<String> {
    let mut errors = Vec::new();

    let mut keys = HashSet::new();
    let mut neuron_ids: HashSet<NeuronId> = HashSet::new();
    let mut synapses = Vec::new();
    for gene in genes {
        if !keys.insert(gene.key()) {
            errors.push(format!("duplicate gene '{}'", gene.key()));
            continue;
        }
        match gene {
            Gene::Neuron(neuron) => {
                if !neuron_ids.insert(neuron.id) {
                    errors.push(format!("neuron id {} declared more than once", neuron.id.0));
                }
            }
            Gene::Synapse(synapse) => synapses.push((gene.key(), synapse)),
        }
    }

    for (key, synapse) in synapses {
        for (end, id) in [("source", synapse.src), ("destination", synapse.dst)] {
            if !neuron_ids.contains(&id) {
                errors.push(format!(
                    "synapse '{}' references undeclared {} neuron {}",
                    key, end, id.0
                ));
            }
        }
    }

    errors
}

fn check_io_layout(genes: &[Gene], result: &mut ValidationResult) {
    let position_of = |id: NeuronId| {
        genes.iter().find_map(|gene| match gene {
            Gene::Neuron(n) if n.id == id => Some(n.position),
            _ => None,
        })
    };

    let neurons_at = |position: NeuronPosition| {
        genes.iter().filter_map(move |gene| match gene {
            Gene::Neuron(n) if n.position == position => Some(n.id),
            _ => None,
        })
    };

    if neurons_at(NeuronPosition::Input).next().is_none() {
        result.add_warning("genome has no input neurons".to_string());
    }
    if neurons_at(NeuronPosition::Output).next().is_none() {
        result.add_warning("genome has no output neurons".to_string());
    }

    let targets: HashSet<NeuronId> = genes
        .iter()
        .filter_map(|gene| match gene {
            Gene::Synapse(s) => Some(s.dst),
            Gene::Neuron(_) => None,
        })
        .collect();
    for id in neurons_at(NeuronPosition::Output) {
        if !targets.contains(&id) {
            result.add_warning(format!("output neuron {} has no incoming synapses", id.0));
        }
    }

    for gene in genes {
        if let Gene::Synapse(s) = gene {
            if position_of(s.dst) == Some(NeuronPosition::Input) {
                result.add_warning(format!(
                    "synapse '{}' targets input neuron {} and is ignored",
                    gene.key(),
                    s.dst.0
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eonn_neural::ActivationFunction;

    fn neuron(id: u32, position: NeuronPosition) -> Gene {
        Gene::neuron(id, position, ActivationFunction::Sum, 0.0)
    }

    #[test]
    fn test_valid_genome_has_no_findings() {
        let genome = Genome::new(vec![
            neuron(1, NeuronPosition::Input),
            neuron(2, NeuronPosition::Output),
            Gene::synapse(1, 2, 1.0),
        ])
        .unwrap();
        let result = validate_genome(&genome);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_structural_errors() {
        let genes = vec![
            neuron(1, NeuronPosition::Input),
            neuron(1, NeuronPosition::Hidden),
            Gene::synapse(1, 7, 1.0),
            Gene::synapse(1, 7, 2.0),
        ];
        let result = validate_genes(&genes);
        assert!(!result.valid);
        // duplicate id, duplicate synapse key, dangling destination
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_warnings() {
        let genes = vec![
            neuron(1, NeuronPosition::Input),
            neuron(2, NeuronPosition::Hidden),
            neuron(3, NeuronPosition::Output),
            Gene::synapse(2, 1, 1.0),
        ];
        let result = validate_genes(&genes);
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("no incoming")));
        assert!(result.warnings.iter().any(|w| w.contains("targets input")));
    }

    #[test]
    fn test_empty_genome_warnings() {
        let result = validate_genome(&Genome::default());
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
    }
}
