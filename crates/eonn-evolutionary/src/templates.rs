// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome templates for EONN.

Provides starting genomes for the bundled benchmark tasks (embedded at
compile time from the `genomes/` directory) and a generator for fully connected
layered topologies.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use eonn_neural::{ActivationFunction, NeuronPosition};

use crate::genome::{Gene, Genome};
use crate::types::{EvoError, EvoResult};

/// XOR network: 2 inputs, 2 sigmoid hidden neurons, 1 sigmoid output
pub const XOR_GENOME_TEXT: &str = include_str!("../genomes/xor.net");

/// Mountain car controller: 2 inputs, 3 sigmoid hidden neurons, 1 sum output
pub const MOUNTAIN_CAR_GENOME_TEXT: &str = include_str!("../genomes/mountain_car.net");

/// Load the embedded XOR genome
pub fn load_xor_genome() -> EvoResult<Genome> {
    Genome::parse(XOR_GENOME_TEXT)
}

/// Load the embedded mountain car genome
pub fn load_mountain_car_genome() -> EvoResult<Genome> {
    Genome::parse(MOUNTAIN_CAR_GENOME_TEXT)
}

/// Create a fully connected feed-forward genome with zeroed values
///
/// Ids are assigned inputs first, then outputs, then hidden neurons, starting
/// at 1. With `hidden == 0` inputs connect straight to outputs.
///
/// # Errors
/// `InvalidArgument` if `inputs` or `outputs` is zero.
pub fn create_layered_genome(
    inputs: u32,
    hidden: u32,
    outputs: u32,
    hidden_function: ActivationFunction,
    output_function: ActivationFunction,
) -> EvoResult<Genome> {
    if inputs == 0 || outputs == 0 {
        return Err(EvoError::InvalidArgument(format!(
            "layered genome needs at least one input and one output (got {} and {})",
            inputs, outputs
        )));
    }

    let input_ids: Vec<u32> = (1..=inputs).collect();
    let output_ids: Vec<u32> = (inputs + 1..=inputs + outputs).collect();
    let hidden_ids: Vec<u32> = (inputs + outputs + 1..=inputs + outputs + hidden).collect();

    let mut genes = Vec::new();
    genes.extend(
        input_ids
            .iter()
            .map(|&id| Gene::neuron(id, NeuronPosition::Input, ActivationFunction::Sum, 0.0)),
    );
    genes.extend(
        output_ids
            .iter()
            .map(|&id| Gene::neuron(id, NeuronPosition::Output, output_function, 0.0)),
    );
    genes.extend(
        hidden_ids
            .iter()
            .map(|&id| Gene::neuron(id, NeuronPosition::Hidden, hidden_function, 0.0)),
    );

    let connect = |sources: &[u32], targets: &[u32]| -> Vec<Gene> {
        sources
            .iter()
            .flat_map(|&src| targets.iter().map(move |&dst| Gene::synapse(src, dst, 0.0)))
            .collect()
    };
    if hidden_ids.is_empty() {
        genes.extend(connect(&input_ids, &output_ids));
    } else {
        genes.extend(connect(&input_ids, &hidden_ids));
        genes.extend(connect(&hidden_ids, &output_ids));
    }

    Genome::new(genes)
}
