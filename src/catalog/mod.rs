//! The curated tool catalog: presets, tools and their per-platform routes.
//!
//! The catalog is a `static` table. It never changes during a run, so
//! nothing here needs registration or interior mutability.

mod tools;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::common::package::Routes;
use crate::common::platform::Platform;

pub use tools::TOOLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    Core,
    Agent,
    Media,
    Dx,
    Security,
}

impl PresetId {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Agent => "agent",
            Self::Media => "media",
            Self::Dx => "dx",
            Self::Security => "security",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        PRESETS.iter().map(|p| p.id).find(|p| p.id() == id)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: PresetId,
    pub name: &'static str,
    pub description: &'static str,
    /// Pre-checked in the interactive preset prompt
    pub default_on: bool,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        id: PresetId::Core,
        name: "Core",
        description: "Fundamentals every terminal should have",
        default_on: true,
    },
    Preset {
        id: PresetId::Agent,
        name: "Agent",
        description: "Tools that specifically improve LLM workflows",
        default_on: true,
    },
    Preset {
        id: PresetId::Media,
        name: "Media",
        description: "Image, audio, and video pipeline tools",
        default_on: false,
    },
    Preset {
        id: PresetId::Dx,
        name: "DX",
        description: "Developer experience and quality of life",
        default_on: false,
    },
    Preset {
        id: PresetId::Security,
        name: "Security",
        description: "Scanning and CI hygiene",
        default_on: false,
    },
];

/// A value that is either the same everywhere or spelled out per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformValue<T: 'static> {
    Uniform(T),
    PerPlatform(&'static [(Platform, T)]),
}

impl<T: Copy + 'static> PlatformValue<T> {
    /// The value for `platform`.
    ///
    /// Per-platform maps fall back to the [`Platform::FALLBACK`] entry, then
    /// to the first entry; only an empty map yields `None`.
    pub fn resolve(&self, platform: Platform) -> Option<T> {
        match self {
            Self::Uniform(value) => Some(*value),
            Self::PerPlatform(entries) => Self::lookup(entries, platform)
                .or_else(|| Self::lookup(entries, Platform::FALLBACK))
                .or_else(|| entries.first().map(|(_, v)| *v)),
        }
    }

    fn lookup(entries: &[(Platform, T)], platform: Platform) -> Option<T> {
        entries
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, v)| *v)
    }
}

impl<T: Serialize + 'static> Serialize for PlatformValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uniform(value) => value.serialize(serializer),
            Self::PerPlatform(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (platform, value) in entries.iter() {
                    map.serialize_entry(platform.id(), value)?;
                }
                map.end()
            }
        }
    }
}

/// Install routes for every supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallMap {
    pub darwin: Routes,
    pub linux: Routes,
    pub windows: Routes,
}

impl InstallMap {
    pub fn for_platform(&self, platform: Platform) -> &Routes {
        match platform {
            Platform::Darwin => &self.darwin,
            Platform::Linux => &self.linux,
            Platform::Windows => &self.windows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    /// Unique, stable key used on the command line and in the receipt
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preset: PresetId,
    /// Command whose success means the tool is installed
    pub verify: PlatformValue<&'static str>,
    pub install: InstallMap,
}

impl Tool {
    pub fn routes(&self, platform: Platform) -> &Routes {
        self.install.for_platform(platform)
    }
}

pub fn get_tool(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

pub fn get_tools_by_preset(preset: PresetId) -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| t.preset == preset).collect()
}

/// Catalog tools whose ids appear in `ids`, in catalog order.
pub fn get_tools_by_ids<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Tool> {
    TOOLS
        .iter()
        .filter(|t| ids.iter().any(|id| id.as_ref() == t.id))
        .collect()
}

pub fn all_tools() -> Vec<&'static Tool> {
    TOOLS.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::package::PackageManager;
    use std::collections::HashSet;

    #[test]
    fn tool_ids_are_unique() {
        let mut seen = HashSet::new();
        for tool in TOOLS {
            assert!(seen.insert(tool.id), "duplicate tool id {}", tool.id);
        }
    }

    #[test]
    fn every_preset_has_tools() {
        for preset in PRESETS {
            assert!(
                !get_tools_by_preset(preset.id).is_empty(),
                "preset {} is empty",
                preset.id.id()
            );
        }
    }

    #[test]
    fn no_catalog_entry_has_an_empty_route_list() {
        for tool in TOOLS {
            for platform in Platform::ALL {
                let routes = tool.routes(platform);
                assert!(
                    routes.is_unavailable() || !routes.candidates().is_empty(),
                    "{} has an empty route list on {}",
                    tool.id,
                    platform
                );
            }
        }
    }

    #[test]
    fn every_tool_resolves_a_verify_command() {
        for tool in TOOLS {
            for platform in Platform::ALL {
                let cmd = tool.verify.resolve(platform).unwrap_or("");
                assert!(!cmd.trim().is_empty(), "{} has no verify command", tool.id);
            }
        }
    }

    #[test]
    fn linux_verify_matches_every_route_binary() {
        // (tool, binary from apt, binary from cargo)
        for (id, apt_bin, cargo_bin) in [("fd", "fdfind", "fd"), ("bat", "batcat", "bat")] {
            let tool = get_tool(id).unwrap();
            let managers: Vec<_> = tool
                .routes(Platform::Linux)
                .candidates()
                .iter()
                .map(|r| r.manager)
                .collect();
            assert_eq!(managers, vec![PackageManager::Apt, PackageManager::Cargo]);

            let cmd = tool.verify.resolve(Platform::Linux).unwrap();
            assert!(cmd.contains(&format!("{apt_bin} --version")), "{id}: {cmd}");
            assert!(cmd.contains(&format!("|| {cargo_bin} --version")), "{id}: {cmd}");
            assert_eq!(shell_words::split(cmd).unwrap().len(), 3, "{id}: {cmd}");
        }
    }

    #[test]
    fn preset_from_id() {
        assert_eq!(PresetId::from_id("dx"), Some(PresetId::Dx));
        assert_eq!(PresetId::from_id("essentials"), None);
    }

    #[test]
    fn lookup_helpers() {
        assert_eq!(get_tool("rg").map(|t| t.name), Some("ripgrep"));
        assert!(get_tool("nope").is_none());

        let picked = get_tools_by_ids(&["jq", "rg"]);
        let ids: Vec<_> = picked.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["rg", "jq"]);
    }

    #[test]
    fn platform_value_resolution_order() {
        static MAP: &[(Platform, &str)] = &[
            (Platform::Windows, "win-cmd"),
            (Platform::Darwin, "mac-cmd"),
        ];
        let value = PlatformValue::PerPlatform(MAP);
        assert_eq!(value.resolve(Platform::Windows), Some("win-cmd"));
        assert_eq!(value.resolve(Platform::Linux), Some("mac-cmd"));

        static ONLY_LINUX: &[(Platform, &str)] = &[(Platform::Linux, "linux-cmd")];
        let value = PlatformValue::PerPlatform(ONLY_LINUX);
        assert_eq!(value.resolve(Platform::Windows), Some("linux-cmd"));

        let empty: PlatformValue<&str> = PlatformValue::PerPlatform(&[]);
        assert_eq!(empty.resolve(Platform::Linux), None);

        assert_eq!(PlatformValue::Uniform("jq --version").resolve(Platform::Windows), Some("jq --version"));
    }

    #[test]
    fn serializes_per_platform_as_map() {
        let tool = get_tool("imagemagick").unwrap();
        let json = serde_json::to_value(tool).unwrap();
        assert_eq!(json["verify"]["darwin"], "magick -version");
        assert_eq!(json["install"]["darwin"][0]["manager"], "brew");
    }
}
