use anyhow::Result;
use std::process::{Command, Stdio};

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}

/// Run the built `agent-loadout` binary inside `env`.
pub fn run_loadout_command(env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_agent-loadout"))
        .args(args)
        .env("HOME", env.home())
        .env("USERPROFILE", env.home())
        .env("AGENT_LOADOUT_HOME", env.data_dir())
        .stdin(Stdio::null())
        .output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}
