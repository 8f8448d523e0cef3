// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Topology signatures.

A signature is a SHA-256 hash of a genome's structural key sequence. Two
genomes have the same signature exactly when crossover between them is
defined, which makes it a cheap homogeneity check for a whole pool and a
short tag for log lines.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use sha2::{Digest, Sha256};

use super::gene::GeneKey;
use super::genotype::Genome;

impl Genome {
    /// Topology signature (16 hex chars); values do not affect it
    pub fn signature(&self) -> String {
        topology_signature(self.iter().map(|gene| gene.key()))
    }
}

/// Signature of a structural key sequence
pub fn topology_signature(keys: impl IntoIterator<Item = GeneKey>) -> String {
    let mut hasher = Sha256::new();
    for key in keys {
        hasher.update(key.to_string().as_bytes());
        hasher.update(b"\n");
    }
    let result = hasher.finalize();

    format!("{:x}", result)[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Gene;
    use eonn_neural::{ActivationFunction, NeuronPosition};

    fn genome(weight: f64, output_fn: ActivationFunction) -> Genome {
        Genome::new(vec![
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(2, NeuronPosition::Output, output_fn, 0.0),
            Gene::synapse(1, 2, weight),
        ])
        .unwrap()
    }

    #[test]
    fn test_signature_ignores_values() {
        let a = genome(0.5, ActivationFunction::Sum);
        let b = genome(-3.0, ActivationFunction::Sum);
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature().len(), 16);
    }

    #[test]
    fn test_signature_tracks_topology() {
        let a = genome(0.5, ActivationFunction::Sum);
        let b = genome(0.5, ActivationFunction::Sigmoid);
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_empty_signature_is_stable() {
        assert_eq!(Genome::default().signature(), topology_signature(Vec::new()));
    }
}
