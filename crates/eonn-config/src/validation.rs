// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Ensures configuration values are within valid ranges and consistent with
//! each other before a run starts.

use crate::{ConfigError, ConfigResult, EonnConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    OutOfRange { field: String, value: String, expected: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { field, value, expected } => {
                write!(f, "{} = {} is outside valid range ({})", field, value, expected)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Probabilities within [0, 1]
/// - Finite, non-negative standard deviations
/// - Population and tournament sizes
/// - Elitism not consuming the whole population
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &EonnConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_probabilities(config, &mut errors);
    validate_deviations(config, &mut errors);
    validate_sizes(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_probabilities(config: &EonnConfig, errors: &mut Vec<ConfigValidationError>) {
    let probabilities = [
        ("evolution.mutate_prob", config.evolution.mutate_prob),
        ("evolution.mutate_frac", config.evolution.mutate_frac),
        ("evolution.mutate_replace", config.evolution.mutate_replace),
        ("spawn.frac", config.spawn.frac),
    ];
    for (field, value) in probabilities {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigValidationError::OutOfRange {
                field: field.to_string(),
                value: value.to_string(),
                expected: "0.0-1.0".to_string(),
            });
        }
    }
}

fn validate_deviations(config: &EonnConfig, errors: &mut Vec<ConfigValidationError>) {
    let deviations = [
        ("evolution.mutate_std", config.evolution.mutate_std),
        ("spawn.std", config.spawn.std),
    ];
    for (field, value) in deviations {
        if !value.is_finite() || value < 0.0 {
            errors.push(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: format!("standard deviation must be finite and >= 0, got {}", value),
            });
        }
    }
}

fn validate_sizes(config: &EonnConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.evolution.sample_size == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "evolution.sample_size".to_string(),
            reason: "tournament needs at least one contestant".to_string(),
        });
    }
    if config.spawn.pool_size < 2 {
        errors.push(ConfigValidationError::OutOfRange {
            field: "spawn.pool_size".to_string(),
            value: config.spawn.pool_size.to_string(),
            expected: ">= 2".to_string(),
        });
    }
    if config.evolution.keep >= config.spawn.pool_size {
        errors.push(ConfigValidationError::InvalidValue {
            field: "evolution.keep".to_string(),
            reason: format!(
                "keeping {} elites leaves no room for offspring in a pool of {}",
                config.evolution.keep, config.spawn.pool_size
            ),
        });
    }
    if config.run.evals == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "run.evals".to_string(),
            reason: "every organism needs at least one fitness sample".to_string(),
        });
    }
}
