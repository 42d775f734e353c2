use anyhow::{Context, Result};
use std::path::PathBuf;

/// Centralized path management for agent-loadout.
///
/// Everything lives under `~/.agent-loadout` unless `AGENT_LOADOUT_HOME`
/// points somewhere else.
pub const HOME_ENV: &str = "AGENT_LOADOUT_HOME";

const CLAUDE_CONFIG_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Base directory, without creating it.
pub fn base_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Unable to determine home directory")?;
    Ok(home.join(".agent-loadout"))
}

/// Base directory, created on demand
pub fn ensure_base_dir() -> Result<PathBuf> {
    let dir = base_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating data directory at {}", dir.display()))?;
    Ok(dir)
}

pub fn receipt_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("receipt.json"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

pub fn brewfile_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("Brewfile"))
}

/// Skill files kept alongside the receipt for any agent to read.
pub fn skills_dir() -> Result<PathBuf> {
    Ok(base_dir()?.join("skills"))
}

/// The skill folder Claude picks up: `$CLAUDE_CONFIG_DIR/skills/agent-loadout`,
/// or `~/.claude/skills/agent-loadout`.
pub fn claude_skills_dir() -> Result<PathBuf> {
    let config_dir = match std::env::var_os(CLAUDE_CONFIG_ENV).filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .context("Unable to determine home directory")?
            .join(".claude"),
    };
    Ok(config_dir.join("skills").join("agent-loadout"))
}

/// Every directory skill files are written to.
pub fn skill_dirs() -> Result<Vec<PathBuf>> {
    Ok(vec![skills_dir()?, claude_skills_dir()?])
}

/// Brewfile location as shown to users in previews and retry hints.
pub fn brewfile_display() -> String {
    brewfile_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "~/.agent-loadout/Brewfile".to_string())
}
