// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! XOR: learn the exclusive-or of two binary inputs.
//!
//! Fitness is the inverse of the summed squared error over the four cases,
//! each propagated with a single sweep.

use eonn_config::{EonnConfig, EvolutionConfig, SpawnConfig};
use eonn_neural::Network;

/// The four input pairs, in evaluation order
pub const CASES: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

/// Sweeps per case; hidden neurons update before outputs, so one sweep
/// crosses a hidden layer
pub const SWEEPS: usize = 1;

/// Breeding parameters the XOR benchmark runs with
pub fn evolution_config() -> EvolutionConfig {
    EvolutionConfig {
        keep: 1,
        mutate_prob: 0.9,
        mutate_frac: 0.25,
        mutate_std: 0.8,
        mutate_replace: 0.2,
        ..EvolutionConfig::default()
    }
}

/// Pool size of the XOR benchmark
pub const POOL_SIZE: usize = 30;

/// Configuration the benchmark starts from when no configuration file exists
pub fn preset() -> EonnConfig {
    EonnConfig {
        evolution: evolution_config(),
        spawn: SpawnConfig {
            pool_size: POOL_SIZE,
            ..SpawnConfig::default()
        },
        ..EonnConfig::default()
    }
}

/// Expected output for an input pair
pub fn target(case: [f64; 2]) -> f64 {
    if (case[0] != 0.0) != (case[1] != 0.0) {
        1.0
    } else {
        0.0
    }
}

/// One row of a replay: inputs and the network's first output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseResult {
    pub inputs: [f64; 2],
    pub output: f64,
}

impl CaseResult {
    /// Output rounded to the nearest class
    pub fn rounded(&self) -> f64 {
        self.output.round()
    }
}

/// Run the four cases through `network`
///
/// Returns `None` if the network does not have two inputs and at least one
/// output.
pub fn replay(network: &mut Network) -> Option<Vec<CaseResult>> {
    CASES
        .iter()
        .map(|&inputs| {
            let outputs = network.propagate(&inputs, Some(SWEEPS)).ok()?;
            let output = *outputs.first()?;
            Some(CaseResult { inputs, output })
        })
        .collect()
}

/// `1 / Σ (output − target)²`; NaN for networks that do not fit the task
pub fn fitness(network: &mut Network) -> f64 {
    match replay(network) {
        Some(results) => {
            let error: f64 = results
                .iter()
                .map(|r| (r.output - target(r.inputs)).powi(2))
                .sum();
            1.0 / error
        }
        None => f64::NAN,
    }
}

/// `true` if every rounded output matches its target
pub fn solves(network: &mut Network) -> bool {
    replay(network).map_or(false, |results| {
        results.iter().all(|r| r.rounded() == target(r.inputs))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eonn_evolutionary::{develop, templates, Gene, Genome};
    use eonn_neural::{ActivationFunction, NeuronPosition};

    #[test]
    fn test_targets() {
        let targets: Vec<f64> = CASES.iter().map(|&c| target(c)).collect();
        assert_eq!(targets, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_fitness_of_template_is_finite() {
        let mut network = develop(&templates::load_xor_genome().unwrap()).unwrap();
        let score = fitness(&mut network);
        assert!(score.is_finite() && score > 0.0);
    }

    #[test]
    fn test_wrong_shape_scores_nan() {
        let genome = Genome::new(vec![
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(2, NeuronPosition::Output, ActivationFunction::Sum, 0.0),
            Gene::synapse(1, 2, 1.0),
        ])
        .unwrap();
        let mut network = develop(&genome).unwrap();
        assert!(fitness(&mut network).is_nan());
        assert!(!solves(&mut network));
    }

    #[test]
    fn test_direct_sum_output() {
        // out = x + y: error is only on (1, 1), where it is (2 - 0)^2 = 4
        let genome = Genome::new(vec![
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(2, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(3, NeuronPosition::Output, ActivationFunction::Sum, 0.0),
            Gene::synapse(1, 3, 1.0),
            Gene::synapse(2, 3, 1.0),
        ])
        .unwrap();
        let mut network = develop(&genome).unwrap();
        assert_eq!(fitness(&mut network), 0.25);
        assert!(!solves(&mut network));
    }
}
