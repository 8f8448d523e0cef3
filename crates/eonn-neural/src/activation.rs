// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron transfer functions
//!
//! Pure functions, no state.

/// Steepness of the logistic transfer function
pub const SIGMOID_RESPONSE: f64 = 4.924273;

/// Steepened logistic function: `1 / (1 + e^(-a * 4.924273))`
///
/// # Example
/// ```
/// use eonn_neural::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(2.0) > 0.99);
/// assert!(sigmoid(-2.0) < 0.01);
/// ```
#[inline]
pub fn sigmoid(activation: f64) -> f64 {
    1.0 / (1.0 + (-activation * SIGMOID_RESPONSE).exp())
}
