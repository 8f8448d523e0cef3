// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types and error handling for EONN evolution.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use eonn_neural::NeuralError;
use thiserror::Error;

/// Result type for evolution operations
pub type EvoResult<T> = Result<T, EvoError>;

/// Error types for evolution operations
#[derive(Error, Debug)]
pub enum EvoError {
    /// Two genomes with different structural key sequences were aligned
    #[error("Topology mismatch: {0}")]
    TopologyMismatch(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Neural error: {0}")]
    Neural(#[from] NeuralError),
}

// Convert from std::io::Error
impl From<std::io::Error> for EvoError {
    fn from(err: std::io::Error) -> Self {
        EvoError::IoError(err.to_string())
    }
}
