//! Post-install verification: run each tool's version command and report
//! what is actually on the machine.

use colored::*;
use futures_util::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::catalog::Tool;
use crate::common::platform::Platform;

/// The single verify command to run for `tool` on `platform`.
///
/// Per-platform commands fall back to the darwin entry, then to any entry.
/// An empty string means the catalog gave nothing to run.
pub fn verify_command(tool: &Tool, platform: Platform) -> &'static str {
    tool.verify.resolve(platform).unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResult {
    pub id: String,
    pub name: String,
    pub installed: bool,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub ok: bool,
    pub installed: usize,
    pub total: usize,
    pub tools: Vec<VerifyResult>,
}

impl VerifySummary {
    pub fn new(results: Vec<VerifyResult>) -> Self {
        let installed = results.iter().filter(|r| r.installed).count();
        Self {
            ok: installed == results.len(),
            installed,
            total: results.len(),
            tools: results,
        }
    }
}

/// Verify every tool concurrently; results keep input order.
pub async fn verify_tools(
    tools: &[&Tool],
    platform: Platform,
    check_timeout: Duration,
) -> Vec<VerifyResult> {
    join_all(tools.iter().map(|tool| check_tool(tool, platform, check_timeout))).await
}

async fn check_tool(tool: &Tool, platform: Platform, check_timeout: Duration) -> VerifyResult {
    let version = run_version_command(verify_command(tool, platform), check_timeout).await;
    VerifyResult {
        id: tool.id.to_string(),
        name: tool.name.to_string(),
        installed: version.is_some(),
        version: version.unwrap_or_default(),
    }
}

/// Run `command` and return the first line of its output if it exits 0.
pub async fn run_version_command(command: &str, check_timeout: Duration) -> Option<String> {
    let words = shell_words::split(command).ok()?;
    let (program, args) = words.split_first()?;
    let program = which::which(program).ok()?;

    let output = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();
    let output = timeout(check_timeout, output).await.ok()?.ok()?;
    if !output.status.success() {
        return None;
    }

    // A few tools print their version banner on stderr
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first_line = |s: &str| s.lines().next().unwrap_or("").trim().to_string();
    let version = match first_line(&stdout) {
        line if line.is_empty() => first_line(&stderr),
        line => line,
    };
    Some(version)
}

/// Versions of the installed tools, keyed by tool id.
pub fn installed_versions(results: &[VerifyResult]) -> BTreeMap<String, String> {
    results
        .iter()
        .filter(|r| r.installed)
        .map(|r| (r.id.clone(), r.version.clone()))
        .collect()
}

pub fn print_verify_results(results: &[VerifyResult]) {
    let max_name = results.iter().map(|r| r.name.len()).max().unwrap_or(0);

    for r in results {
        if r.installed {
            println!(
                "  {} {:<width$}  {}",
                "✓".green(),
                r.name,
                r.version.dimmed(),
                width = max_name
            );
        } else {
            println!(
                "  {} {:<width$}  {}",
                "✗".red(),
                r.name,
                "not found".red(),
                width = max_name
            );
        }
    }

    let summary = VerifySummary::new(results.to_vec());
    println!();
    if summary.ok {
        println!("{}", format!("  All {} tools installed.", summary.total).green());
    } else {
        println!(
            "{}",
            format!("  {}/{} tools installed.", summary.installed, summary.total).yellow()
        );
    }
}
