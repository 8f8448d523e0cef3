// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug flags
//!
//! Crate names come from a CLI parser (`--debug eonn-neural`, `--debug all`)
//! and from the `EONN_DEBUG` environment variable.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Set of crates whose logging is raised to `debug`
///
/// # Example
/// ```rust
/// use eonn_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_names(["eonn-neural"]);
/// assert_eq!(flags.to_filter_string("info"), "eonn_neural=debug,info");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Build flags from bare crate names; `all` enables every known crate
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = CrateDebugFlags::default();
        for name in names {
            flags.enable(name.as_ref());
        }
        flags
    }

    /// Enable one crate, or every known crate for `all`
    pub fn enable(&mut self, crate_name: &str) {
        let crate_name = crate_name.trim();
        if crate_name.is_empty() {
            return;
        }
        if crate_name == "all" {
            for known in KNOWN_CRATES {
                self.enabled_crates.insert(known.to_string());
            }
        } else {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    /// Create a tracing filter from debug flags
    ///
    /// Crate names are turned into module targets (`eonn-neural` ->
    /// `eonn_neural`). Format: `"eonn_neural=debug,info"`.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|name| format!("{}=debug", name.replace('-', "_")))
            .collect();
        filters.push(default_level.to_lowercase());
        filters.join(",")
    }
}

impl CrateDebugFlags {
    /// Add crates listed in `EONN_DEBUG` (comma-separated, or `all`)
    pub fn merge_env(&mut self) {
        if let Ok(env_var) = env::var("EONN_DEBUG") {
            for crate_name in env_var.split(',') {
                self.enable(crate_name);
            }
        }
    }
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug all                     Enable debug logging for all crates
  --debug {{crate-name}}           Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  EONN_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  EONN_DEBUG=all                             Enable debug for all crates
"#,
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_names(["eonn-neural"]);
        assert!(flags.enabled_crates.contains("eonn-neural"));
        assert!(!flags.enabled_crates.contains("eonn-evolutionary"));
    }

    #[test]
    fn test_blank_names_ignored() {
        let flags = CrateDebugFlags::from_names(["", "  "]);
        assert!(flags.enabled_crates.is_empty());
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_names(["all"]);
        for crate_name in KNOWN_CRATES {
            assert!(
                flags.enabled_crates.contains(*crate_name),
                "{} should be enabled",
                crate_name
            );
        }
    }

    #[test]
    fn test_help_lists_known_crates() {
        let help = debug_flags_help();
        for crate_name in KNOWN_CRATES {
            assert!(help.contains(crate_name));
        }
    }

    #[test]
    fn test_filter_string() {
        let flags = CrateDebugFlags::from_names(["eonn-evolutionary"]);
        assert_eq!(flags.to_filter_string("INFO"), "eonn_evolutionary=debug,info");
    }

    #[test]
    fn test_filter_string_without_flags() {
        assert_eq!(CrateDebugFlags::default().to_filter_string("warn"), "warn");
    }
}
