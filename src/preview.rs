use colored::*;

use crate::common::package::PackageManager;
use crate::common::paths;
use crate::common::platform::PlatformInfo;
use crate::resolve::InstallPlan;

/// The command each manager's batch will run, as shown before installing.
pub fn install_preview(manager: PackageManager, packages: &[&str]) -> String {
    match manager {
        PackageManager::Brew => format!("brew bundle --file {}", paths::brewfile_display()),
        PackageManager::Cargo => format!("cargo install {}", packages.join(" ")),
        other => other.install_hint(packages),
    }
}

/// Render the plan: platform line, skipped tools with reasons, then one
/// command per manager.
pub fn render_preview(plan: &InstallPlan<'_>, info: &PlatformInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nPlatform: {} {}\n",
        info.platform.id().cyan(),
        info.arch.id().dimmed()
    ));

    if !plan.skipped.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format!("Skipped ({} tools):", plan.skipped.len()).yellow()
        ));
        for skipped in &plan.skipped {
            out.push_str(&format!(
                "{}\n",
                format!("  • {} — {}", skipped.tool.name, skipped.reason).dimmed()
            ));
        }
    }

    let groups = plan.group_by_manager();
    if groups.is_empty() {
        out.push_str(&format!("\n{}\n", "Nothing to install.".dimmed()));
        return out;
    }

    out.push('\n');
    for (manager, items) in groups {
        let packages: Vec<&str> = items.iter().map(|r| r.package_name).collect();
        out.push_str(&format!("{}\n", format!("{}:", manager.id()).bold()));
        out.push_str(&format!("  {}\n\n", install_preview(manager, &packages).dimmed()));
    }

    out
}

pub fn print_preview(plan: &InstallPlan<'_>, info: &PlatformInfo) {
    print!("{}", render_preview(plan, info));
}
