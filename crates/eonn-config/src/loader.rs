// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{validate_config, ConfigError, ConfigResult, EonnConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Name of the configuration file searched for on disk
pub const CONFIG_FILE_NAME: &str = "eonn_configuration.toml";

/// Option keys accepted by [`apply_cli_overrides`]
pub const RECOGNIZED_OPTIONS: &[&str] = &[
    "sample_size",
    "keep",
    "mutate_prob",
    "mutate_frac",
    "mutate_std",
    "mutate_replace",
    "pool_size",
    "spawn_frac",
    "spawn_std",
    "epochs",
    "evals",
    "seed",
    "log_level",
];

/// Environment variable -> option key
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("EONN_SAMPLE_SIZE", "sample_size"),
    ("EONN_KEEP", "keep"),
    ("EONN_MUTATE_PROB", "mutate_prob"),
    ("EONN_MUTATE_FRAC", "mutate_frac"),
    ("EONN_MUTATE_STD", "mutate_std"),
    ("EONN_MUTATE_REPLACE", "mutate_replace"),
    ("EONN_POOL_SIZE", "pool_size"),
    ("EONN_EPOCHS", "epochs"),
    ("EONN_EVALS", "evals"),
    ("EONN_SEED", "seed"),
    ("EONN_LOG_LEVEL", "log_level"),
];

/// Find the EONN configuration file
///
/// Search order:
/// 1. `EONN_CONFIG_PATH` environment variable
/// 2. Current working directory: `./eonn_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("EONN_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by EONN_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet EONN_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides, keyed by [`RECOGNIZED_OPTIONS`]
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, has an
/// unknown or malformed CLI override, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EonnConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let config: EonnConfig = toml::from_str(&content)?;

    finish(config, cli_args)
}

/// Like [`load_config`], but starts from `fallback` when no path is given
/// and no configuration file can be found
///
/// Binaries use this to start from their own preset when no configuration
/// file exists; environment and CLI overrides still apply on top.
pub fn load_config_or(
    fallback: EonnConfig,
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EonnConfig> {
    match config_path {
        Some(_) => load_config(config_path, cli_args),
        None => match find_config_file() {
            Ok(path) => load_config(Some(&path), cli_args),
            Err(ConfigError::FileNotFound(_)) => finish(fallback, cli_args),
            Err(e) => Err(e),
        },
    }
}

fn finish(
    mut config: EonnConfig,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EonnConfig> {
    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `EONN_SAMPLE_SIZE` -> `evolution.sample_size`
/// - `EONN_KEEP` -> `evolution.keep`
/// - `EONN_MUTATE_PROB` -> `evolution.mutate_prob`
/// - `EONN_MUTATE_FRAC` -> `evolution.mutate_frac`
/// - `EONN_MUTATE_STD` -> `evolution.mutate_std`
/// - `EONN_MUTATE_REPLACE` -> `evolution.mutate_replace`
/// - `EONN_POOL_SIZE` -> `spawn.pool_size`
/// - `EONN_EPOCHS` -> `run.epochs`
/// - `EONN_EVALS` -> `run.evals`
/// - `EONN_SEED` -> `run.seed`
/// - `EONN_LOG_LEVEL` -> `logging.level`
///
/// Values that fail to parse are skipped with a warning; the names of the
/// skipped variables are returned.
pub fn apply_environment_overrides(config: &mut EonnConfig) -> Vec<&'static str> {
    let mut rejected = Vec::new();
    for &(var, key) in ENV_OVERRIDES {
        if let Ok(value) = env::var(var) {
            if let Err(e) = set_option(config, key, &value) {
                warn!(variable = var, error = %e, "ignoring environment override");
                rejected.push(var);
            }
        }
    }
    rejected
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Map of option keys to values (e.g., `{"keep": "1", "mutate_std": "0.8"}`)
///
/// # Errors
///
/// `ConfigError::InvalidValue` for a key outside [`RECOGNIZED_OPTIONS`] or a
/// value that does not parse
pub fn apply_cli_overrides(
    config: &mut EonnConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    for (key, value) in cli_args {
        set_option(config, key, value)?;
    }
    Ok(())
}

fn set_option(config: &mut EonnConfig, key: &str, value: &str) -> ConfigResult<()> {
    match key {
        "sample_size" => config.evolution.sample_size = parse(key, value)?,
        "keep" => config.evolution.keep = parse(key, value)?,
        "mutate_prob" => config.evolution.mutate_prob = parse(key, value)?,
        "mutate_frac" => config.evolution.mutate_frac = parse(key, value)?,
        "mutate_std" => config.evolution.mutate_std = parse(key, value)?,
        "mutate_replace" => config.evolution.mutate_replace = parse(key, value)?,
        "pool_size" => config.spawn.pool_size = parse(key, value)?,
        "spawn_frac" => config.spawn.frac = parse(key, value)?,
        "spawn_std" => config.spawn.std = parse(key, value)?,
        "epochs" => config.run.epochs = parse(key, value)?,
        "evals" => config.run.evals = parse(key, value)?,
        "seed" => config.run.seed = Some(parse(key, value)?),
        "log_level" => config.logging.level = value.to_string(),
        _ => {
            return Err(ConfigError::InvalidValue(format!(
                "unknown option '{}' (recognized: {})",
                key,
                RECOGNIZED_OPTIONS.join(", ")
            )))
        }
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("{} = '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for (var, _) in ENV_OVERRIDES {
            env::remove_var(var);
        }
        env::remove_var("EONN_CONFIG_PATH");
    }

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("EONN_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("EONN_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_missing_env_path_is_reported() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        env::set_var("EONN_CONFIG_PATH", "/definitely/not/here.toml");
        let result = find_config_file();
        env::remove_var("EONN_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[evolution]").unwrap();
        writeln!(file, "keep = 1").unwrap();
        writeln!(file, "mutate_std = 0.8").unwrap();
        writeln!(file, "[run]").unwrap();
        writeln!(file, "seed = 7").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.evolution.keep, 1);
        assert_eq!(config.evolution.mutate_std, 0.8);
        assert_eq!(config.run.seed, Some(7));
        // untouched sections keep their defaults
        assert_eq!(config.evolution.sample_size, 5);
        assert_eq!(config.spawn.pool_size, 30);
    }

    #[test]
    fn test_invalid_toml() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[evolution\nkeep = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = EonnConfig::default();

        env::set_var("EONN_SAMPLE_SIZE", "3");
        env::set_var("EONN_MUTATE_PROB", "0.9");
        env::set_var("EONN_KEEP", "not-a-number");

        let rejected = apply_environment_overrides(&mut config);

        env::remove_var("EONN_SAMPLE_SIZE");
        env::remove_var("EONN_MUTATE_PROB");
        env::remove_var("EONN_KEEP");

        assert_eq!(rejected, vec!["EONN_KEEP"]);
        assert_eq!(config.evolution.sample_size, 3);
        assert_eq!(config.evolution.mutate_prob, 0.9);
        assert_eq!(config.evolution.keep, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = EonnConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("keep".to_string(), "2".to_string());
        cli_args.insert("mutate_replace".to_string(), "0.1".to_string());
        cli_args.insert("seed".to_string(), "99".to_string());

        apply_cli_overrides(&mut config, &cli_args).unwrap();

        assert_eq!(config.evolution.keep, 2);
        assert_eq!(config.evolution.mutate_replace, 0.1);
        assert_eq!(config.run.seed, Some(99));
    }

    #[test]
    fn test_cli_rejects_unknown_option() {
        let mut config = EonnConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("mutation_rate".to_string(), "0.5".to_string());

        let err = apply_cli_overrides(&mut config, &cli_args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_cli_rejects_malformed_value() {
        let mut config = EonnConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("sample_size".to_string(), "five".to_string());

        assert!(apply_cli_overrides(&mut config, &cli_args).is_err());
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[evolution]").unwrap();
        writeln!(file, "sample_size = 2").unwrap();
        writeln!(file, "keep = 1").unwrap();

        env::set_var("EONN_SAMPLE_SIZE", "4");
        env::set_var("EONN_KEEP", "3");

        let mut cli_args = HashMap::new();
        cli_args.insert("keep".to_string(), "5".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args));

        env::remove_var("EONN_SAMPLE_SIZE");
        env::remove_var("EONN_KEEP");

        let config = config.unwrap();
        // CLI wins for keep, env wins for sample_size (no CLI override)
        assert_eq!(config.evolution.keep, 5);
        assert_eq!(config.evolution.sample_size, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[evolution]\nmutate_prob = 1.5\n").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_explicit_file_replaces_fallback() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[spawn]\npool_size = 7\n").unwrap();

        let mut fallback = EonnConfig::default();
        fallback.spawn.pool_size = 99;
        fallback.evolution.keep = 3;

        let config = load_config_or(fallback, Some(&config_path), None).unwrap();
        assert_eq!(config.spawn.pool_size, 7);
        assert_eq!(config.evolution.keep, 0);
    }
}
