// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Network (phenotype)
//!
//! A circuit of neurons connected by weighted synapses.
//!
//! ## Dynamics
//!
//! ```text
//! Input neurons:
//!     activation = input value (loaded directly)
//!
//! One sweep (hidden neurons first, then output neurons, in insertion order):
//!     activation = bias + Σ (source.output × weight)   for every incoming synapse
//!     output     = f(activation)                        f ∈ {SUM, SIGMOID}
//! ```
//!
//! Neurons are updated in place, so a neuron later in the sweep already sees
//! the new outputs of the neurons before it. Recurrent connections read
//! whatever the source held at that moment.
//!
//! Without an explicit sweep count, sweeps repeat until the output vector is
//! bit-for-bit identical between two consecutive sweeps, bounded by
//! `max_sweeps`. Recurrent topologies may oscillate and never settle; in that
//! case the outputs after the last sweep are returned.

use ahash::AHashMap;
use tracing::{debug, trace, warn};

use crate::types::{ActivationFunction, NeuralError, NeuralResult, NeuronId, NeuronPosition};

/// Upper bound on sweeps when propagating until the outputs settle
pub const DEFAULT_MAX_SWEEPS: usize = 1000;

#[derive(Debug, Clone)]
struct Neuron {
    id: NeuronId,
    position: NeuronPosition,
    function: ActivationFunction,
    bias: f64,
    activation: f64,
    incoming: Vec<Synapse>,
}

impl Neuron {
    #[inline]
    fn output(&self) -> f64 {
        self.function.apply(self.activation)
    }
}

/// Incoming connection; `source` indexes the network's neuron arena
#[derive(Debug, Clone, Copy)]
struct Synapse {
    source: usize,
    weight: f64,
}

/// Incremental constructor for [`Network`]
///
/// Neurons must be added before the synapses that reference them.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    neurons: Vec<Neuron>,
    index: AHashMap<NeuronId, usize>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a neuron
    ///
    /// # Errors
    /// `DuplicateNeuron` if `id` was already added.
    pub fn add_neuron(
        &mut self,
        id: NeuronId,
        position: NeuronPosition,
        function: ActivationFunction,
        bias: f64,
    ) -> NeuralResult<&mut Self> {
        if self.index.contains_key(&id) {
            return Err(NeuralError::DuplicateNeuron(id));
        }
        self.index.insert(id, self.neurons.len());
        self.neurons.push(Neuron {
            id,
            position,
            function,
            bias,
            activation: 0.0,
            incoming: Vec::new(),
        });
        Ok(self)
    }

    /// Connect `src` to `dst`
    ///
    /// Input neurons never receive connections: a synapse whose destination is
    /// an input neuron is accepted and dropped.
    ///
    /// # Errors
    /// `UnknownNeuron` if either end has not been added yet.
    pub fn add_synapse(&mut self, src: NeuronId, dst: NeuronId, weight: f64) -> NeuralResult<&mut Self> {
        let source = *self.index.get(&src).ok_or(NeuralError::UnknownNeuron(src))?;
        let target = *self.index.get(&dst).ok_or(NeuralError::UnknownNeuron(dst))?;

        let neuron = &mut self.neurons[target];
        if neuron.position != NeuronPosition::Input {
            neuron.incoming.push(Synapse { source, weight });
        }
        Ok(self)
    }

    /// Finish construction, partitioning neurons by position
    pub fn build(self) -> Network {
        let select = |position: NeuronPosition| -> Vec<usize> {
            self.neurons
                .iter()
                .enumerate()
                .filter(|(_, n)| n.position == position)
                .map(|(i, _)| i)
                .collect()
        };
        let inputs = select(NeuronPosition::Input);
        let hidden = select(NeuronPosition::Hidden);
        let outputs = select(NeuronPosition::Output);

        Network {
            neurons: self.neurons,
            inputs,
            hidden,
            outputs,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            last_sweeps: 0,
            last_converged: true,
            unsettled: 0,
        }
    }
}

/// Executable neural network built from a genome
#[derive(Debug, Clone)]
pub struct Network {
    neurons: Vec<Neuron>,
    inputs: Vec<usize>,
    hidden: Vec<usize>,
    outputs: Vec<usize>,
    max_sweeps: usize,
    last_sweeps: usize,
    last_converged: bool,
    unsettled: usize,
}

impl Network {
    /// Same network with a different sweep bound (minimum 1)
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps.max(1);
        self
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    /// Number of sweeps performed by the last call to [`Network::propagate`]
    pub fn last_sweeps(&self) -> usize {
        self.last_sweeps
    }

    /// Whether the last unbounded propagation reached a fixed point
    ///
    /// Always `true` after a propagation with an explicit sweep count.
    pub fn converged(&self) -> bool {
        self.last_converged
    }

    /// Unbounded propagations that hit `max_sweeps` without settling
    pub fn unsettled_count(&self) -> usize {
        self.unsettled
    }

    /// Ids of the output neurons, in output-vector order
    pub fn output_ids(&self) -> Vec<NeuronId> {
        self.outputs.iter().map(|&i| self.neurons[i].id).collect()
    }

    /// Current output vector
    pub fn outputs(&self) -> Vec<f64> {
        self.outputs.iter().map(|&i| self.neurons[i].output()).collect()
    }

    /// Zero every activation, forgetting all recurrent state
    pub fn reset(&mut self) {
        for neuron in &mut self.neurons {
            neuron.activation = 0.0;
        }
        self.last_sweeps = 0;
        self.last_converged = true;
    }

    /// Propagate `inputs` through the network and return its outputs
    ///
    /// With `sweeps = Some(t)` exactly `t` sweeps are performed. With `None`
    /// the network is swept until its outputs stop changing, at most
    /// `max_sweeps` times.
    ///
    /// Activation state persists between calls.
    ///
    /// # Errors
    /// `InvalidArgument` if `inputs.len()` differs from the number of input neurons.
    pub fn propagate(&mut self, inputs: &[f64], sweeps: Option<usize>) -> NeuralResult<Vec<f64>> {
        self.load(inputs)?;
        match sweeps {
            Some(count) => {
                for _ in 0..count {
                    self.activate();
                }
                self.last_sweeps = count;
                self.last_converged = true;
            }
            None => self.settle(),
        }
        Ok(self.outputs())
    }

    fn load(&mut self, inputs: &[f64]) -> NeuralResult<()> {
        if inputs.len() != self.inputs.len() {
            return Err(NeuralError::InvalidArgument(format!(
                "Wrong number of input values: expected {}, got {}",
                self.inputs.len(),
                inputs.len()
            )));
        }
        for (&index, &value) in self.inputs.iter().zip(inputs) {
            self.neurons[index].activation = value;
        }
        Ok(())
    }

    /// One sweep over every non-input neuron
    fn activate(&mut self) {
        for &index in self.hidden.iter().chain(self.outputs.iter()) {
            let neuron = &self.neurons[index];
            let activation = neuron
                .incoming
                .iter()
                .fold(neuron.bias, |acc, synapse| {
                    acc + self.neurons[synapse.source].output() * synapse.weight
                });
            self.neurons[index].activation = activation;
        }
    }

    fn settle(&mut self) {
        let mut previous = self.outputs();
        for sweep in 1..=self.max_sweeps {
            self.activate();
            let current = self.outputs();
            if bitwise_equal(&previous, &current) {
                trace!(sweeps = sweep, "network settled");
                self.last_sweeps = sweep;
                self.last_converged = true;
                return;
            }
            previous = current;
        }
        self.unsettled += 1;
        if self.unsettled == 1 {
            warn!(
                max_sweeps = self.max_sweeps,
                "network did not settle, returning outputs of the last sweep"
            );
        } else {
            debug!(
                max_sweeps = self.max_sweeps,
                unsettled = self.unsettled,
                "network did not settle"
            );
        }
        self.last_sweeps = self.max_sweeps;
        self.last_converged = false;
    }
}

fn bitwise_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}
