// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for network construction and propagation

use super::ids::NeuronId;

/// Error types for neural operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeuralError {
    /// Bad call argument, e.g. wrong number of input values
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A synapse referenced a neuron that was never added
    #[error("Unknown neuron: {0}")]
    UnknownNeuron(NeuronId),

    /// The same neuron id was added twice
    #[error("Duplicate neuron: {0}")]
    DuplicateNeuron(NeuronId),
}

/// Result type for neural operations
pub type NeuralResult<T> = Result<T, NeuralError>;
