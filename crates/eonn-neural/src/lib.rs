// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # EONN Neural Computation
//!
//! The **phenotype** side of EONN:
//! - **Types**: neuron identity, position, activation function, errors
//! - **Activation**: transfer functions (SUM, SIGMOID)
//! - **Network**: neuron/synapse graph construction and propagation
//!
//! A [`Network`] is a pure function of the genome it was developed from. It is
//! never edited after [`NetworkBuilder::build`]; when the genome changes the
//! owner builds a new one.
//!
//! ## Example
//! ```
//! use eonn_neural::{ActivationFunction, NetworkBuilder, NeuronId, NeuronPosition};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_neuron(NeuronId(1), NeuronPosition::Input, ActivationFunction::Sum, 0.0)?;
//! builder.add_neuron(NeuronId(2), NeuronPosition::Output, ActivationFunction::Sum, 0.5)?;
//! builder.add_synapse(NeuronId(1), NeuronId(2), 2.0)?;
//! let mut network = builder.build();
//!
//! assert_eq!(network.propagate(&[1.0], None)?, vec![2.5]);
//! # Ok::<(), eonn_neural::NeuralError>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod activation;
pub mod network;
pub mod types;

pub use activation::{sigmoid, SIGMOID_RESPONSE};
pub use network::{Network, NetworkBuilder, DEFAULT_MAX_SWEEPS};
pub use types::{ActivationFunction, NeuralError, NeuralResult, NeuronId, NeuronPosition};
