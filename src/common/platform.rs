//! Platform detection: which OS we run on and which package managers
//! are actually callable here.

use futures_util::future::join_all;
use serde::Serialize;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::common::package::PackageManager;
use crate::ui::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("unsupported operating system: {0} (supported: darwin, linux, windows)")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    #[cfg(test)]
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Windows];

    /// Platform whose catalog entries stand in when a tool says nothing
    /// about the current one.
    pub const FALLBACK: Platform = Platform::Darwin;

    pub fn id(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self, PlatformError> {
        match os {
            "macos" | "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" | "win32" => Ok(Self::Windows),
            other => Err(PlatformError::Unsupported(other.to_string())),
        }
    }

    pub fn current() -> Result<Self, PlatformError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Managers worth probing on this platform.
    pub fn candidate_managers(&self) -> &'static [PackageManager] {
        match self {
            Self::Darwin => &[PackageManager::Brew, PackageManager::Npm, PackageManager::Cargo],
            Self::Linux => &[PackageManager::Apt, PackageManager::Npm, PackageManager::Cargo],
            Self::Windows => &[PackageManager::Scoop, PackageManager::Npm, PackageManager::Cargo],
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    pub fn from_arch(arch: &str) -> Self {
        match arch {
            "aarch64" | "arm64" => Self::Arm64,
            _ => Self::X64,
        }
    }

    pub fn current() -> Self {
        Self::from_arch(std::env::consts::ARCH)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

/// What this machine offers. Built once per run, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub arch: Arch,
    pub available: Vec<PackageManager>,
}

impl PlatformInfo {
    /// Build from explicit data, de-duplicating `available` in order.
    pub fn new(
        platform: Platform,
        arch: Arch,
        available: impl IntoIterator<Item = PackageManager>,
    ) -> Self {
        let mut managers: Vec<PackageManager> = Vec::new();
        for manager in available {
            if !managers.contains(&manager) {
                managers.push(manager);
            }
        }
        Self {
            platform,
            arch,
            available: managers,
        }
    }

    /// Build from probe results, making sure the host manager is present.
    pub fn from_probes(platform: Platform, arch: Arch, probed: Vec<PackageManager>) -> Self {
        let mut info = Self::new(platform, arch, probed);
        if !info.is_available(PackageManager::HOST) {
            info.available.push(PackageManager::HOST);
        }
        info
    }

    pub fn is_available(&self, manager: PackageManager) -> bool {
        self.available.contains(&manager)
    }
}

/// Inspect the running system and probe its package managers concurrently.
pub async fn detect(probe_timeout: Duration) -> Result<PlatformInfo, PlatformError> {
    let platform = Platform::current()?;
    let arch = Arch::current();
    let probed = probe_managers(platform.candidate_managers(), probe_timeout).await;

    let info = PlatformInfo::from_probes(platform, arch, probed);
    emit(
        Level::Debug,
        "platform.detected",
        &format!(
            "Detected {} {} with {}",
            info.platform,
            info.arch.id(),
            info.available
                .iter()
                .map(|m| m.id())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None,
    );
    Ok(info)
}

/// Probe every candidate independently; the result keeps candidate order.
pub async fn probe_managers(
    candidates: &[PackageManager],
    probe_timeout: Duration,
) -> Vec<PackageManager> {
    let checks = candidates.iter().map(|&manager| async move {
        let found = has_command(manager.probe_binary(), probe_timeout).await;
        emit(
            Level::Debug,
            "platform.probe",
            &format!(
                "probe {} -> {}",
                manager.probe_binary(),
                if found { "found" } else { "missing" }
            ),
            None,
        );
        (manager, found)
    });

    join_all(checks)
        .await
        .into_iter()
        .filter_map(|(manager, found)| found.then_some(manager))
        .collect()
}

/// True when `<binary> --version` exits successfully within the timeout.
pub async fn has_command(binary: &str, probe_timeout: Duration) -> bool {
    // Resolving through PATH first also picks up .cmd/.ps1 shims on Windows
    let Ok(path) = which::which(binary) else {
        return false;
    };

    let status = TokioCommand::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status();

    matches!(timeout(probe_timeout, status).await, Ok(Ok(s)) if s.success())
}
