// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Core type definitions shared by the phenotype and the genome encoding.

pub mod error;
pub mod ids;
pub mod neuron;

// Re-export commonly used types
pub use error::{NeuralError, NeuralResult};
pub use ids::NeuronId;
pub use neuron::{ActivationFunction, NeuronPosition};
