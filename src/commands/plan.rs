use anyhow::{Context, Result};
use serde_json::json;

use crate::catalog::{PRESETS, Tool};
use crate::common::config::Config;
use crate::common::platform;
use crate::common::progress::create_spinner;
use crate::preview::print_preview;
use crate::resolve::resolve_install_plan;
use crate::select::{
    SelectionArgs, apply_skip, check_skip_ids, select_from_args, tools_for_presets,
};

/// Tools a `plan` run looks at. Without selection flags this is the set
/// of presets that are pre-checked in the interactive prompt.
fn planned_tools(selection: &SelectionArgs, config: &Config) -> Result<Vec<&'static Tool>> {
    if !selection.is_interactive() {
        return Ok(select_from_args(selection, &config.skip)?);
    }
    check_skip_ids(selection)?;
    let defaults: Vec<_> = PRESETS.iter().filter(|p| p.default_on).map(|p| p.id).collect();
    let tools = apply_skip(tools_for_presets(&defaults), &selection.skip);
    Ok(apply_skip(tools, &config.skip))
}

pub async fn handle_plan(selection: SelectionArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let tools = planned_tools(&selection, &config)?;

    let spinner = create_spinner("Detecting package managers...");
    let info = platform::detect(config.probe_timeout()).await;
    spinner.finish_and_clear();
    let info = info?;

    let plan = resolve_install_plan(&tools, &info);
    if json {
        let out = json!({ "platform": info, "plan": plan });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serializing install plan")?
        );
    } else {
        print_preview(&plan, &info);
    }
    Ok(())
}
