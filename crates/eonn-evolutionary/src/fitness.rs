// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fitness functions

use eonn_neural::Network;

/// Scores one episode of a network on a task; higher is better
///
/// Implemented for every `FnMut(&mut Network) -> f64`, so closures work
/// directly. Returning NaN marks the sample as undefined; such organisms
/// rank below every scored one.
pub trait FitnessFunction {
    fn evaluate(&mut self, network: &mut Network) -> f64;
}

impl<F> FitnessFunction for F
where
    F: FnMut(&mut Network) -> f64,
{
    fn evaluate(&mut self, network: &mut Network) -> f64 {
        self(network)
    }
}
