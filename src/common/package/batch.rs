//! Batched package installation.
//!
//! Resolved installs are grouped by package manager so each manager runs
//! once per invocation, with one sudo prompt at most.

use colored::*;

use super::PackageManager;
use super::install::{install_package_names, retry_hint};
use crate::resolve::InstallPlan;
use crate::ui::prelude::*;

/// A batch of packages to install, grouped by package manager.
#[derive(Debug, Default)]
pub struct InstallBatch<'a> {
    /// Packages grouped by manager, in plan order
    batches: Vec<(PackageManager, Vec<PackageToInstall<'a>>)>,
}

/// Information about a package to install
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackageToInstall<'a> {
    /// Human-readable name of the tool
    pub tool_name: &'a str,
    pub package_name: &'static str,
}

/// What happened when a batch ran.
#[derive(Debug, Default, PartialEq)]
pub struct BatchOutcome {
    /// Managers whose runner reported a failure, with the error message
    pub failed: Vec<(PackageManager, String)>,
}

impl BatchOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<'a> InstallBatch<'a> {
    pub fn from_plan(plan: &InstallPlan<'a>) -> Self {
        let batches = plan
            .group_by_manager()
            .into_iter()
            .map(|(manager, items)| {
                let packages = items
                    .into_iter()
                    .map(|item| PackageToInstall {
                        tool_name: item.tool.name,
                        package_name: item.package_name,
                    })
                    .collect();
                (manager, packages)
            })
            .collect();
        Self { batches }
    }

    fn package_names(packages: &[PackageToInstall<'_>]) -> Vec<&'static str> {
        packages.iter().map(|p| p.package_name).collect()
    }

    /// Run every manager's batch in order. A failing manager does not stop
    /// the others; it is reported with a manual retry command.
    pub fn execute(&self) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (manager, packages) in &self.batches {
            if packages.is_empty() {
                continue;
            }

            let names = Self::package_names(packages);
            blank_line();
            emit(
                Level::Info,
                "install.manager",
                &format!("Installing via {}...", manager.id()).bold().to_string(),
                Some(serde_json::json!({ "manager": manager, "packages": names })),
            );
            if manager.compiles_from_source() {
                emit(
                    Level::Info,
                    "install.compile_note",
                    &format!(
                        "  Note: {} installs compile from source - this may take a while.",
                        manager.id()
                    )
                    .dimmed()
                    .to_string(),
                    None,
                );
            }

            if let Err(e) = install_package_names(*manager, &names) {
                emit(
                    Level::Warn,
                    "install.failed",
                    &format!(
                        "\n  {} failed: {:#}. Try manually: {}",
                        manager.display_name(),
                        e,
                        retry_hint(*manager, &names)
                    ),
                    None,
                );
                outcome.failed.push((*manager, format!("{:#}", e)));
            }
        }

        outcome
    }
}
