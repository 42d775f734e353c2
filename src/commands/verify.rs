use anyhow::{Context, Result};
use colored::*;

use crate::catalog::{Tool, all_tools, get_tools_by_ids};
use crate::common::config::Config;
use crate::common::platform::Platform;
use crate::common::progress::create_spinner;
use crate::receipt::{Receipt, read_receipt};
use crate::verify::{VerifySummary, print_verify_results, verify_tools};

/// Tools recorded in the receipt, or the whole catalog when there is none.
fn tools_to_verify(receipt: Option<&Receipt>) -> Vec<&'static Tool> {
    match receipt {
        Some(r) if !r.selections.is_empty() => get_tools_by_ids(&r.selections),
        _ => all_tools(),
    }
}

/// Returns whether every checked tool is installed.
pub async fn handle_verify(json: bool) -> Result<bool> {
    let config = Config::load()?;
    let platform = Platform::current()?;
    let receipt = read_receipt()?;
    let tools = tools_to_verify(receipt.as_ref());

    let spinner = create_spinner(format!("Verifying {} tools...", tools.len()));
    let results = verify_tools(&tools, platform, config.verify_timeout()).await;
    spinner.finish_and_clear();

    if json {
        let summary = VerifySummary::new(results);
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing verify results")?
        );
        return Ok(summary.ok);
    }

    println!("{}", "Verifying installed tools:".bold());
    println!();
    print_verify_results(&results);
    Ok(results.iter().all(|r| r.installed))
}
