//! Install-plan resolution: which manager installs which package for
//! which tool on this machine.
//!
//! Resolution is a pure function of the requested tools and the detected
//! [`PlatformInfo`]. It never fails: every tool ends up either resolved or
//! skipped with a reason.

use serde::Serialize;
use serde::ser::Serializer;

use crate::catalog::Tool;
use crate::common::package::PackageManager;
use crate::common::platform::PlatformInfo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedInstall<'a> {
    #[serde(serialize_with = "serialize_tool_id")]
    pub tool: &'a Tool,
    pub manager: PackageManager,
    #[serde(rename = "package")]
    pub package_name: &'static str,
}

/// Why a tool was left out of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The catalog marks the tool as unavailable on this platform.
    Unavailable,
    /// The catalog lists no route at all for this platform.
    NoRoutes,
    /// Routes exist, but none of their managers are available.
    Requires(Vec<PackageManager>),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unavailable => write!(f, "not available on this platform"),
            SkipReason::NoRoutes => write!(f, "no install route for this platform"),
            SkipReason::Requires(managers) => {
                let names: Vec<&str> = managers.iter().map(|m| m.id()).collect();
                write!(f, "requires {}", names.join(" or "))
            }
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTool<'a> {
    #[serde(serialize_with = "serialize_tool_id")]
    pub tool: &'a Tool,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstallPlan<'a> {
    pub resolved: Vec<ResolvedInstall<'a>>,
    pub skipped: Vec<SkippedTool<'a>>,
}

fn serialize_tool_id<S: Serializer>(tool: &&Tool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tool.id)
}

/// Decide, per tool and in input order, the first route whose manager is available.
pub fn resolve_install_plan<'a>(tools: &[&'a Tool], info: &PlatformInfo) -> InstallPlan<'a> {
    let mut plan = InstallPlan::default();

    for &tool in tools {
        match resolve_tool(tool, info) {
            Ok(resolved) => plan.resolved.push(resolved),
            Err(reason) => plan.skipped.push(SkippedTool { tool, reason }),
        }
    }

    plan
}

fn resolve_tool<'a>(tool: &'a Tool, info: &PlatformInfo) -> Result<ResolvedInstall<'a>, SkipReason> {
    let routes = tool.routes(info.platform);
    if routes.is_unavailable() {
        return Err(SkipReason::Unavailable);
    }

    let candidates = routes.candidates();
    if candidates.is_empty() {
        return Err(SkipReason::NoRoutes);
    }

    if let Some(route) = candidates.iter().find(|r| info.is_available(r.manager)) {
        return Ok(ResolvedInstall {
            tool,
            manager: route.manager,
            package_name: route.package_name,
        });
    }

    let mut required: Vec<PackageManager> = Vec::new();
    for route in candidates {
        if !required.contains(&route.manager) {
            required.push(route.manager);
        }
    }
    Err(SkipReason::Requires(required))
}

impl<'a> InstallPlan<'a> {
    /// True when no tool could be resolved.
    pub fn nothing_to_install(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Resolved installs grouped by manager, in order of first appearance.
    pub fn group_by_manager(&self) -> Vec<(PackageManager, Vec<&ResolvedInstall<'a>>)> {
        let mut groups: Vec<(PackageManager, Vec<&ResolvedInstall<'a>>)> = Vec::new();
        for item in &self.resolved {
            match groups.iter_mut().find(|(m, _)| *m == item.manager) {
                Some((_, group)) => group.push(item),
                None => groups.push((item.manager, vec![item])),
            }
        }
        groups
    }

    /// The tools that will be installed, in plan order.
    pub fn resolved_tools(&self) -> Vec<&'a Tool> {
        self.resolved.iter().map(|r| r.tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InstallMap, PlatformValue, PresetId, TOOLS};
    use crate::common::package::PackageManager::*;
    use crate::common::platform::{Arch, Platform};
    use crate::routes;

    fn tool(id: &'static str, install: InstallMap) -> Tool {
        Tool {
            id,
            name: id,
            description: "test tool",
            preset: PresetId::Core,
            verify: PlatformValue::Uniform("true"),
            install,
        }
    }

    fn info(platform: Platform, available: &[PackageManager]) -> PlatformInfo {
        PlatformInfo::new(platform, Arch::X64, available.iter().copied())
    }

    fn jq() -> Tool {
        tool(
            "jq",
            InstallMap {
                darwin: routes![Brew "jq"],
                linux: routes![Apt "jq"],
                windows: routes![Scoop "jq"],
            },
        )
    }

    fn ripgrep() -> Tool {
        tool(
            "rg",
            InstallMap {
                darwin: routes![Brew "ripgrep"],
                linux: routes![Apt "ripgrep", Cargo "ripgrep"],
                windows: routes![Scoop "ripgrep", Cargo "ripgrep"],
            },
        )
    }

    fn mac_only() -> Tool {
        tool(
            "semgrep",
            InstallMap {
                darwin: routes![Brew "semgrep"],
                linux: routes![unavailable],
                windows: routes![unavailable],
            },
        )
    }

    fn empty_on_linux() -> Tool {
        tool(
            "odd",
            InstallMap {
                darwin: routes![Brew "odd"],
                linux: routes![],
                windows: routes![Scoop "odd"],
            },
        )
    }

    #[test]
    fn universal_tool_resolves_on_darwin() {
        let jq = jq();
        let plan = resolve_install_plan(&[&jq], &info(Platform::Darwin, &[Brew, Npm]));

        assert!(plan.skipped.is_empty());
        assert_eq!(plan.resolved.len(), 1);
        assert_eq!(plan.resolved[0].manager, Brew);
        assert_eq!(plan.resolved[0].package_name, "jq");
    }

    #[test]
    fn falls_back_to_later_candidate() {
        let rg = ripgrep();
        let plan = resolve_install_plan(&[&rg], &info(Platform::Linux, &[Cargo]));

        assert_eq!(plan.resolved[0].manager, Cargo);
        assert_eq!(plan.resolved[0].package_name, "ripgrep");
    }

    #[test]
    fn first_available_candidate_wins() {
        let rg = ripgrep();
        let plan = resolve_install_plan(&[&rg], &info(Platform::Linux, &[Cargo, Apt]));

        assert_eq!(plan.resolved[0].manager, Apt);
    }

    #[test]
    fn unavailable_marker_ignores_available_managers() {
        let tool = mac_only();
        let plan = resolve_install_plan(&[&tool], &info(Platform::Windows, &PackageManager::ALL));

        assert!(plan.resolved.is_empty());
        assert_eq!(plan.skipped[0].reason, SkipReason::Unavailable);
        assert_eq!(plan.skipped[0].reason.to_string(), "not available on this platform");
    }

    #[test]
    fn no_match_names_required_managers() {
        let rg = ripgrep();
        let plan = resolve_install_plan(&[&rg], &info(Platform::Linux, &[]));

        assert_eq!(plan.skipped[0].reason, SkipReason::Requires(vec![Apt, Cargo]));
        assert_eq!(plan.skipped[0].reason.to_string(), "requires apt or cargo");
    }

    #[test]
    fn single_missing_manager_is_named() {
        let jq = jq();
        let plan = resolve_install_plan(&[&jq], &info(Platform::Windows, &[Npm, Cargo]));

        assert_eq!(plan.skipped[0].reason.to_string(), "requires scoop");
    }

    #[test]
    fn empty_route_list_gets_generic_reason() {
        let odd = empty_on_linux();
        let plan = resolve_install_plan(&[&odd], &info(Platform::Linux, &PackageManager::ALL));

        assert_eq!(plan.skipped[0].reason, SkipReason::NoRoutes);
        assert_eq!(plan.skipped[0].reason.to_string(), "no install route for this platform");
    }

    #[test]
    fn duplicates_are_resolved_independently() {
        let jq = jq();
        let plan = resolve_install_plan(&[&jq, &jq], &info(Platform::Linux, &[Apt]));

        assert_eq!(plan.resolved.len(), 2);
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn output_preserves_input_order() {
        let (jq, rg, semgrep) = (jq(), ripgrep(), mac_only());
        let plan = resolve_install_plan(
            &[&rg, &semgrep, &jq],
            &info(Platform::Linux, &[Apt, Cargo]),
        );

        let resolved: Vec<_> = plan.resolved.iter().map(|r| r.tool.id).collect();
        assert_eq!(resolved, vec!["rg", "jq"]);
        assert_eq!(plan.skipped[0].tool.id, "semgrep");
    }

    // Every subset of managers on every platform, against the real catalog.
    fn every_info() -> Vec<PlatformInfo> {
        let mut infos = Vec::new();
        for platform in Platform::ALL {
            for mask in 0u32..(1 << PackageManager::ALL.len()) {
                let available = PackageManager::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1u32 << *i) != 0)
                    .map(|(_, m)| *m);
                infos.push(PlatformInfo::new(platform, Arch::X64, available));
            }
        }
        infos
    }

    #[test]
    fn plan_is_total_and_respects_availability() {
        let tools: Vec<&Tool> = TOOLS.iter().collect();
        for info in every_info() {
            let plan = resolve_install_plan(&tools, &info);

            assert_eq!(plan.resolved.len() + plan.skipped.len(), tools.len());
            for item in &plan.resolved {
                assert!(info.is_available(item.manager));
                assert!(!plan.skipped.iter().any(|s| s.tool.id == item.tool.id));
            }
        }
    }

    #[test]
    fn resolved_route_is_first_eligible_candidate() {
        let tools: Vec<&Tool> = TOOLS.iter().collect();
        for info in every_info() {
            for item in resolve_install_plan(&tools, &info).resolved {
                let first = item
                    .tool
                    .routes(info.platform)
                    .candidates()
                    .iter()
                    .find(|r| info.is_available(r.manager))
                    .unwrap();
                assert_eq!((first.manager, first.package_name), (item.manager, item.package_name));
            }
        }
    }

    #[test]
    fn unavailable_platform_entries_always_skip() {
        let tools: Vec<&Tool> = TOOLS.iter().collect();
        for info in every_info() {
            let plan = resolve_install_plan(&tools, &info);
            for tool in &tools {
                if tool.routes(info.platform).is_unavailable() {
                    let skipped = plan.skipped.iter().find(|s| s.tool.id == tool.id).unwrap();
                    assert_eq!(skipped.reason, SkipReason::Unavailable);
                }
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let tools: Vec<&Tool> = TOOLS.iter().collect();
        let info = info(Platform::Linux, &[Npm, Cargo]);
        assert_eq!(resolve_install_plan(&tools, &info), resolve_install_plan(&tools, &info));
    }

    #[test]
    fn group_by_manager_keeps_first_appearance_order() {
        let (jq, rg, knip) = (
            jq(),
            ripgrep(),
            tool(
                "knip",
                InstallMap {
                    darwin: routes![Npm "knip"],
                    linux: routes![Npm "knip"],
                    windows: routes![Npm "knip"],
                },
            ),
        );
        let plan = resolve_install_plan(&[&knip, &jq, &rg], &info(Platform::Linux, &[Apt, Npm]));

        let groups = plan.group_by_manager();
        let order: Vec<_> = groups.iter().map(|(m, _)| *m).collect();
        assert_eq!(order, vec![Npm, Apt]);
        let apt: Vec<_> = groups[1].1.iter().map(|r| r.package_name).collect();
        assert_eq!(apt, vec!["jq", "ripgrep"]);
    }

    #[test]
    fn plan_serializes_tool_ids_and_reasons() {
        let (jq, semgrep) = (jq(), mac_only());
        let plan = resolve_install_plan(&[&jq, &semgrep], &info(Platform::Linux, &[Apt]));

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["resolved"][0]["tool"], "jq");
        assert_eq!(json["resolved"][0]["manager"], "apt");
        assert_eq!(json["resolved"][0]["package"], "jq");
        assert_eq!(json["skipped"][0]["reason"], "not available on this platform");
    }
}
