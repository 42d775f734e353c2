use anyhow::{Context, Result};
use colored::*;
use serde_json::json;

use crate::catalog::{PRESETS, TOOLS, get_tools_by_preset};

pub fn handle_list(json: bool) -> Result<()> {
    if json {
        let out = json!({ "presets": PRESETS, "tools": TOOLS });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serializing catalog")?
        );
        return Ok(());
    }

    let width = TOOLS.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for preset in PRESETS {
        let tools = get_tools_by_preset(preset.id);
        let default = if preset.default_on { " (default)" } else { "" };
        println!(
            "{}{} {}",
            preset.name.bold(),
            default.dimmed(),
            format!("[{}] {}", preset.id.id(), preset.description).dimmed()
        );
        for tool in tools {
            println!(
                "  {}  {}",
                format!("{:<width$}", tool.id, width = width).cyan(),
                tool.description
            );
        }
        println!();
    }
    println!("{}", format!("{} tools in {} presets", TOOLS.len(), PRESETS.len()).dimmed());
    Ok(())
}
