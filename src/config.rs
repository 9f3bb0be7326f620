use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_DELTA;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "RUSTY_CHAOS_CONFIG";

/// Analysis parameters. Every field has a default, so `{}` is a valid file.
///
/// ```json
/// { "delta": 1e-8 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Perturbation added to the previous sample.
    pub delta: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(text).context("parsing config JSON")?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Load from the file named by `RUSTY_CHAOS_CONFIG`, or use the defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let config = Self::from_json_file(Path::new(&path))?;
                log::info!("Using config from {}: {config:?}", Path::new(&path).display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.delta.is_finite() && self.delta > 0.0,
            "delta must be a positive finite number, got {}",
            self.delta
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = AnalysisConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.delta, 1e-8);
    }

    #[test]
    fn explicit_delta_is_read() {
        let config = AnalysisConfig::from_json_str(r#"{"delta": 0.5}"#).unwrap();
        assert_eq!(config.delta, 0.5);
    }

    #[test]
    fn non_positive_delta_is_rejected() {
        assert!(AnalysisConfig::from_json_str(r#"{"delta": 0}"#).is_err());
        assert!(AnalysisConfig::from_json_str(r#"{"delta": -1e-3}"#).is_err());
    }
}
