// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome representation and I/O for EONN Evolution.

This module handles:
- Genes and their structural keys
- The sorted gene container ([`Genome`]) and its genetic operators
- Parsing and saving the line-oriented genome text format
- Topology signatures

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

pub mod gene;
pub mod genotype;
pub mod parser;
pub mod saver;
pub mod signatures;

// Re-export main types
pub use gene::{Gene, GeneKey, NeuronGene, SynapseGene, NEURON_TAG, SYNAPSE_TAG};
pub use genotype::Genome;
pub use signatures::topology_signature;
