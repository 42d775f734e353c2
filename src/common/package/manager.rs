//! Package manager enum and related functionality.

use serde::Serialize;

/// A package-manager family a catalog route can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// Homebrew - macOS
    Brew,
    /// npm global installs - every platform with Node
    Npm,
    /// APT - Debian/Ubuntu family
    Apt,
    /// Scoop - Windows
    Scoop,
    /// Cargo - compiles from source, most resource intensive
    Cargo,
}

impl PackageManager {
    #[cfg(test)]
    pub const ALL: [PackageManager; 5] = [
        PackageManager::Brew,
        PackageManager::Npm,
        PackageManager::Apt,
        PackageManager::Scoop,
        PackageManager::Cargo,
    ];

    /// The manager that ships this program. It is always reported as
    /// available, since the binary could not be running otherwise.
    pub const HOST: PackageManager = PackageManager::Cargo;

    /// Stable lowercase identifier used in skip reasons and JSON output.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Npm => "npm",
            Self::Apt => "apt",
            Self::Scoop => "scoop",
            Self::Cargo => "cargo",
        }
    }

    /// Get a human-readable name for this package manager.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Brew => "Homebrew",
            Self::Npm => "npm",
            Self::Apt => "APT",
            Self::Scoop => "Scoop",
            Self::Cargo => "Cargo",
        }
    }

    /// Binary invoked with `--version` to decide whether this manager is callable.
    pub fn probe_binary(&self) -> &'static str {
        match self {
            Self::Apt => "apt-get",
            other => other.id(),
        }
    }

    /// Returns true if this manager builds packages from source.
    pub fn compiles_from_source(&self) -> bool {
        matches!(self, Self::Cargo)
    }

    /// Shell command a user can run to install `packages` by hand.
    pub fn install_hint(&self, packages: &[&str]) -> String {
        let joined = packages.join(" ");
        match self {
            Self::Brew => format!("brew install {}", joined),
            Self::Npm => format!("npm install -g {}", joined),
            Self::Apt => format!("sudo apt-get install -y {}", joined),
            Self::Scoop => format!("scoop install {}", joined),
            Self::Cargo => format!("cargo install {}", joined),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
