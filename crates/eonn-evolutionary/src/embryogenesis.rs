// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Embryogenesis: genome → network.

A single forward pass over the genes. Key ordering puts every neuron gene
before every synapse gene, so synapse endpoints always exist by the time
they are connected.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use eonn_neural::{Network, NetworkBuilder};
use tracing::trace;

use crate::genome::{Gene, Genome};
use crate::types::EvoResult;

/// Build the phenotype of `genome`
pub fn develop(genome: &Genome) -> EvoResult<Network> {
    let mut builder = NetworkBuilder::new();
    for gene in genome {
        match gene {
            Gene::Neuron(n) => {
                builder.add_neuron(n.id, n.position, n.function, n.bias)?;
            }
            Gene::Synapse(s) => {
                builder.add_synapse(s.src, s.dst, s.weight)?;
            }
        }
    }
    let network = builder.build();
    trace!(
        inputs = network.input_count(),
        hidden = network.hidden_count(),
        outputs = network.output_count(),
        "network developed"
    );
    Ok(network)
}
