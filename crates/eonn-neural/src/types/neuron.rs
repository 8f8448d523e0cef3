// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron position and transfer function tags.
//!
//! Both carry a stable numeric code, which is how they appear in the genome
//! text encoding.

use core::fmt;

use crate::activation::sigmoid;

/// Where a neuron sits in the network
///
/// The declaration order (`Input < Output < Hidden`) follows the numeric codes
/// and is part of the structural ordering of genes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NeuronPosition {
    Input,
    Output,
    Hidden,
}

impl NeuronPosition {
    /// Numeric code used by the genome encoding
    pub fn code(self) -> u8 {
        match self {
            NeuronPosition::Input => 0,
            NeuronPosition::Output => 1,
            NeuronPosition::Hidden => 2,
        }
    }

    /// Decode a numeric code, `None` if the code is unknown
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(NeuronPosition::Input),
            1 => Some(NeuronPosition::Output),
            2 => Some(NeuronPosition::Hidden),
            _ => None,
        }
    }
}

impl fmt::Display for NeuronPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NeuronPosition::Input => "input",
            NeuronPosition::Output => "output",
            NeuronPosition::Hidden => "hidden",
        };
        f.write_str(name)
    }
}

/// Transfer function applied to a neuron's activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivationFunction {
    /// Identity
    Sum,
    /// Logistic curve with fixed steepness, see [`crate::SIGMOID_RESPONSE`]
    Sigmoid,
}

impl ActivationFunction {
    /// Numeric code used by the genome encoding
    pub fn code(self) -> u8 {
        match self {
            ActivationFunction::Sum => 0,
            ActivationFunction::Sigmoid => 1,
        }
    }

    /// Decode a numeric code, `None` if the code is unknown
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ActivationFunction::Sum),
            1 => Some(ActivationFunction::Sigmoid),
            _ => None,
        }
    }

    /// Compute the neuron output for the given activation
    #[inline]
    pub fn apply(self, activation: f64) -> f64 {
        match self {
            ActivationFunction::Sum => activation,
            ActivationFunction::Sigmoid => sigmoid(activation),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivationFunction::Sum => "sum",
            ActivationFunction::Sigmoid => "sigmoid",
        };
        f.write_str(name)
    }
}
