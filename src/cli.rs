// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Command-line plumbing shared by the task binaries
//!
//! Resolves configuration (preset or file → environment → `--set` → explicit
//! flags), installs logging, loads the prototype genome and seeds the random
//! generator.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::{load_config_or, EonnConfig};
use crate::evolutionary::random::{fresh_seed, seeded_rng};
use crate::evolutionary::{validate_genome, EvoResult, Genome};
use crate::observability::{init_logging, CrateDebugFlags, LoggingGuard};

/// Options common to every task binary
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Prototype genome file (defaults to the task's built-in genome)
    #[arg(short, long)]
    pub genome: Option<PathBuf>,

    /// Configuration file (defaults to a discovered eonn_configuration.toml,
    /// then the task preset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generations to evolve
    #[arg(long)]
    pub epochs: Option<usize>,

    /// Fitness evaluations per organism
    #[arg(long)]
    pub evals: Option<usize>,

    /// Organisms per generation
    #[arg(long)]
    pub pool_size: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override a configuration option, e.g. `--set mutate_std=0.5` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Enable debug logging for a crate, or `all` (repeatable)
    #[arg(long = "debug", value_name = "CRATE")]
    pub debug: Vec<String>,

    /// Write a JSON log under this directory (needs the file-logging feature)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Save the champion genome to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Log epochs at debug level only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Everything a task binary needs to start evolving
pub struct RunSetup {
    pub config: EonnConfig,
    pub genome: Genome,
    pub rng: StdRng,
    pub seed: u64,
    /// Keeps the file logger alive; drop last
    pub logging: LoggingGuard,
}

impl RunArgs {
    /// Option overrides collected from `--set` and the explicit flags
    ///
    /// Explicit flags win over `--set` for the same option.
    pub fn option_overrides(&self) -> Result<HashMap<String, String>> {
        let mut options = HashMap::new();
        for entry in &self.overrides {
            let Some((key, value)) = entry.split_once('=') else {
                bail!("invalid override '{}', expected KEY=VALUE", entry);
            };
            options.insert(key.trim().to_string(), value.trim().to_string());
        }
        let flags = [
            ("epochs", self.epochs.map(|v| v.to_string())),
            ("evals", self.evals.map(|v| v.to_string())),
            ("pool_size", self.pool_size.map(|v| v.to_string())),
            ("seed", self.seed.map(|v| v.to_string())),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                options.insert(key.to_string(), value);
            }
        }
        Ok(options)
    }

    /// Resolve configuration on top of `preset`, without side effects
    pub fn resolve_config(&self, preset: EonnConfig) -> Result<EonnConfig> {
        let overrides = self.option_overrides()?;
        let mut config = load_config_or(preset, self.config.as_deref(), Some(&overrides))
            .context("Failed to load configuration")?;
        if self.quiet {
            config.run.verbose = false;
        }
        Ok(config)
    }

    /// Resolve configuration, install logging, load the genome and seed the generator
    ///
    /// `default_genome` supplies the task's built-in genome when `--genome`
    /// is not given.
    pub fn prepare(
        &self,
        preset: EonnConfig,
        default_genome: impl FnOnce() -> EvoResult<Genome>,
    ) -> Result<RunSetup> {
        let config = self.resolve_config(preset)?;

        let mut flags = CrateDebugFlags::from_names(&self.debug);
        flags.merge_env();
        let logging = init_logging(&flags, &config.logging.level, self.log_dir.clone())?;
        if let Some(dir) = logging.log_dir() {
            info!(log_dir = %dir.display(), "writing JSON log");
        }

        let genome = match &self.genome {
            Some(path) => Genome::open(path)
                .with_context(|| format!("Failed to load genome {}", path.display()))?,
            None => default_genome().context("Failed to load built-in genome")?,
        };
        for warning in validate_genome(&genome).warnings {
            warn!("genome: {}", warning);
        }

        let seed = config.run.seed.unwrap_or_else(fresh_seed);
        info!(
            seed,
            genes = genome.len(),
            signature = %genome.signature(),
            pool_size = config.spawn.pool_size,
            epochs = config.run.epochs,
            "run configured"
        );

        Ok(RunSetup {
            rng: seeded_rng(Some(seed)),
            seed,
            genome,
            config,
            logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags_override_set() {
        let args = RunArgs {
            epochs: Some(12),
            overrides: vec!["epochs=3".to_string(), "mutate_std = 0.5".to_string()],
            ..RunArgs::default()
        };
        let options = args.option_overrides().unwrap();
        assert_eq!(options["epochs"], "12");
        assert_eq!(options["mutate_std"], "0.5");
    }

    #[test]
    fn test_malformed_override() {
        let args = RunArgs {
            overrides: vec!["keep".to_string()],
            ..RunArgs::default()
        };
        assert!(args.option_overrides().is_err());
    }

    #[test]
    fn test_resolve_config_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "[run]\nepochs = 7\n").unwrap();

        let args = RunArgs {
            config: Some(path),
            seed: Some(99),
            quiet: true,
            ..RunArgs::default()
        };
        let config = args.resolve_config(EonnConfig::default()).unwrap();
        assert_eq!(config.run.epochs, 7);
        assert_eq!(config.run.seed, Some(99));
        assert!(!config.run.verbose);
    }
}
