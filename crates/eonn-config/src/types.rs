// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `eonn_configuration.toml`:
//!
//! ```toml
//! [evolution]
//! sample_size = 5
//! keep = 1
//! mutate_prob = 0.9
//!
//! [spawn]
//! pool_size = 30
//!
//! [run]
//! epochs = 100
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EonnConfig {
    pub evolution: EvolutionConfig,
    pub spawn: SpawnConfig,
    pub run: RunConfig,
    pub logging: LoggingConfig,
}

/// Breeding parameters consulted by the generational loop
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Organisms drawn per tournament
    pub sample_size: usize,
    /// Organisms copied unchanged into the next generation (elitism)
    pub keep: usize,
    /// Probability that an offspring is mutated
    pub mutate_prob: f64,
    /// Per-gene mutation probability when an offspring is mutated
    pub mutate_frac: f64,
    /// Standard deviation of the gaussian mutation
    pub mutate_std: f64,
    /// Probability that a mutated value is replaced instead of perturbed
    pub mutate_replace: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            sample_size: 5,
            keep: 0,
            mutate_prob: 0.75,
            mutate_frac: 0.2,
            mutate_std: 1.0,
            mutate_replace: 0.25,
        }
    }
}

/// Initial population parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub pool_size: usize,
    /// Per-gene mutation probability applied to every organism but the first
    pub frac: f64,
    pub std: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            pool_size: 30,
            frac: 0.5,
            std: 0.5,
        }
    }
}

/// Run length and reproducibility
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    pub epochs: usize,
    /// Fitness samples collected per organism
    pub evals: usize,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Log every epoch at info level
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            evals: 1,
            seed: None,
            verbose: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
