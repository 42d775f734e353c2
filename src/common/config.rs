use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::paths;

fn default_probe_timeout() -> u64 {
    5
}

fn default_verify_timeout() -> u64 {
    5
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds to wait for a package manager's `--version` probe
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Seconds to wait for a tool's verify command
    #[serde(default = "default_verify_timeout")]
    pub verify_timeout_secs: u64,
    /// Tool ids that are never installed, whatever the selection
    #[serde(default)]
    pub skip: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            probe_timeout_secs: default_probe_timeout(),
            verify_timeout_secs: default_verify_timeout(),
            skip: Vec::new(),
        }
    }
}

impl Config {
    /// Load the config from disk. If the config file does not exist,
    /// create a default config file and return the default.
    pub fn load() -> Result<Config> {
        paths::ensure_base_dir()?;
        let cfg_path = paths::config_path()?;
        Self::load_from(&cfg_path)
    }

    pub fn load_from(cfg_path: &Path) -> Result<Config> {
        if !cfg_path.exists() {
            let default = Config::default();
            default.save_to(cfg_path)?;
            return Ok(default);
        }
        let s = fs::read_to_string(cfg_path)
            .with_context(|| format!("reading config {}", cfg_path.display()))?;
        let c: Config = toml::from_str(&s)
            .with_context(|| format!("parsing config toml {}", cfg_path.display()))?;
        Ok(c)
    }

    pub fn save_to(&self, cfg_path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("serializing config to toml")?;
        fs::write(cfg_path, toml)
            .with_context(|| format!("writing config to {}", cfg_path.display()))?;
        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.max(1))
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "skip = [\"ffmpeg\"]\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.skip, vec!["ffmpeg".to_string()]);
        assert_eq!(cfg.probe_timeout_secs, 5);
        assert_eq!(cfg.verify_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let cfg = Config {
            probe_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(cfg.probe_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "probe_timeout_secs = \"soon\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
