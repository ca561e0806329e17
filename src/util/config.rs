//! Runtime settings taken from the environment at startup.

use std::{path::PathBuf, sync::OnceLock};

pub const LOG_ENV: &str = "TRADE_PLANNER_LOG";
pub const QUOTE_SEED_ENV: &str = "TRADE_PLANNER_QUOTE_SEED";
pub const STATE_DIR_ENV: &str = "TRADE_PLANNER_STATE_DIR";

const DEFAULT_LOG_FILTER: &str = "info";

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Process-wide settings, read from the environment on first use.
pub fn runtime_config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(RuntimeConfig::from_env)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Fixes trade quotes across launches when set.
    pub quote_seed: Option<u64>,
    /// Overrides the per-user config directory for `state.json`.
    pub state_dir: Option<PathBuf>,
    /// Problems found while reading the environment. Collected here because
    /// the subscriber is installed only after the config is read.
    pub diagnostics: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            quote_seed: None,
            state_dir: None,
            diagnostics: Vec::new(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut diagnostics = Vec::new();

        let quote_seed = non_empty(QUOTE_SEED_ENV).and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                diagnostics.push(format!("ignoring {QUOTE_SEED_ENV}={raw:?}: {e}"));
                None
            }
        });

        Self {
            log_filter: non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            quote_seed,
            state_dir: non_empty(STATE_DIR_ENV).map(PathBuf::from),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), RuntimeConfig::default());
    }

    #[test]
    fn reads_all_settings() {
        let cfg = config(&[
            (LOG_ENV, "debug"),
            (QUOTE_SEED_ENV, " 1234 "),
            (STATE_DIR_ENV, "/tmp/planner"),
        ]);
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.quote_seed, Some(1234));
        assert_eq!(cfg.state_dir, Some(PathBuf::from("/tmp/planner")));
        assert!(cfg.diagnostics.is_empty());
    }

    #[test]
    fn bad_seed_is_ignored() {
        let cfg = config(&[(QUOTE_SEED_ENV, "lucky")]);
        assert_eq!(cfg.quote_seed, None);
        assert_eq!(cfg.diagnostics.len(), 1);
        assert!(cfg.diagnostics[0].contains(QUOTE_SEED_ENV));
        assert!(cfg.diagnostics[0].contains("\"lucky\""));
    }
}
