use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated home for one test run. The binary reads and writes its
/// config and receipt here instead of the real `~/.agent-loadout`.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Fake `$HOME`
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Value for `AGENT_LOADOUT_HOME`
    pub fn data_dir(&self) -> PathBuf {
        self.home().join(".agent-loadout")
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.data_dir().join("receipt.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir().join("config.toml")
    }

    /// Write a config file before the binary runs.
    pub fn write_config(&self, contents: &str) -> Result<()> {
        std::fs::create_dir_all(self.data_dir())?;
        std::fs::write(self.config_path(), contents)?;
        Ok(())
    }
}
