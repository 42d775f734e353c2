use anyhow::Result;
use colored::*;

use crate::catalog::Tool;
use crate::common::config::Config;
use crate::common::package::InstallBatch;
use crate::common::paths;
use crate::common::platform;
use crate::common::progress::create_spinner;
use crate::preview::print_preview;
use crate::receipt::{Receipt, write_receipt};
use crate::resolve::{InstallPlan, resolve_install_plan};
use crate::select::{
    SelectionArgs, apply_skip, check_skip_ids, confirm_install, select_from_args,
    select_interactively,
};
use crate::skills::write_skills;
use crate::ui::prelude::*;
use crate::verify::{installed_versions, print_verify_results, verify_tools};

/// The command that applies a previewed non-interactive selection.
fn rerun_command(selection: &SelectionArgs) -> String {
    format!("agent-loadout install {} --apply", selection.to_flags())
}

pub async fn handle_install(selection: SelectionArgs, apply: bool) -> Result<()> {
    let config = Config::load()?;
    let interactive = selection.is_interactive();

    // Flags are validated before any child process is spawned
    let flagged = if interactive {
        check_skip_ids(&selection)?;
        None
    } else {
        Some(select_from_args(&selection, &config.skip)?)
    };

    let spinner = create_spinner("Detecting package managers...");
    let info = platform::detect(config.probe_timeout()).await;
    spinner.finish_and_clear();
    let info = info?;

    let tools = match flagged {
        Some(tools) => tools,
        None => {
            let picked = select_interactively(info.platform, config.verify_timeout()).await?;
            apply_skip(apply_skip(picked, &selection.skip), &config.skip)
        }
    };

    if tools.is_empty() {
        emit(Level::Info, "install.empty", "No tools selected.", None);
        return Ok(());
    }

    let plan = resolve_install_plan(&tools, &info);
    print_preview(&plan, &info);

    if plan.nothing_to_install() {
        return Ok(());
    }

    if !interactive && !apply {
        emit(
            Level::Info,
            "install.dry_run",
            &format!(
                "Dry run. To install, rerun with --apply:\n  {}",
                rerun_command(&selection).bold()
            ),
            Some(serde_json::json!({ "command": rerun_command(&selection) })),
        );
        return Ok(());
    }

    if interactive && !confirm_install().await? {
        emit(Level::Info, "install.declined", "Nothing installed.", None);
        return Ok(());
    }

    run_install(&plan, &tools, info.platform, &config).await
}

async fn run_install(
    plan: &InstallPlan<'_>,
    selected: &[&Tool],
    platform: platform::Platform,
    config: &Config,
) -> Result<()> {
    let outcome = InstallBatch::from_plan(plan).execute();

    let resolved = plan.resolved_tools();
    blank_line();
    emit(
        Level::Info,
        "install.verify",
        &"Verifying installed tools:".bold().to_string(),
        None,
    );
    let spinner = create_spinner(format!("Checking {} tools...", resolved.len()));
    let results = verify_tools(&resolved, platform, config.verify_timeout()).await;
    spinner.finish_and_clear();
    print_verify_results(&results);

    let receipt = Receipt::new(
        selected.iter().map(|t| t.id.to_string()).collect(),
        installed_versions(&results),
    );
    write_receipt(&receipt)?;
    emit(
        Level::Debug,
        "receipt.written",
        &format!("Receipt written to {}", paths::receipt_path()?.display()),
        None,
    );

    let installed: Vec<&Tool> = resolved
        .iter()
        .zip(&results)
        .filter(|(_, r)| r.installed)
        .map(|(t, _)| *t)
        .collect();
    match write_skills(&installed) {
        Ok(0) => {}
        Ok(count) => emit(
            Level::Info,
            "skills.written",
            &format!(
                "  {} skill files written to {}",
                count,
                paths::claude_skills_dir()?.display()
            )
            .dimmed()
            .to_string(),
            Some(serde_json::json!({ "count": count })),
        ),
        Err(e) => emit(
            Level::Warn,
            "skills.failed",
            &format!("  Could not write skill files: {:#}", e),
            None,
        ),
    }

    if !outcome.all_succeeded() {
        let managers: Vec<&str> = outcome.failed.iter().map(|(m, _)| m.id()).collect();
        emit(
            Level::Warn,
            "install.partial",
            &format!("Some installers failed: {}", managers.join(", ")),
            None,
        );
    } else {
        emit(Level::Success, "install.done", "Done.", None);
    }
    Ok(())
}
