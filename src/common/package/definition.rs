//! Install routes - how a tool is installed with a specific manager on one platform.

use serde::ser::{Serialize, Serializer};

use super::PackageManager;

/// One candidate install route for a tool on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PlatformInstall {
    /// Which package manager this route uses.
    pub manager: PackageManager,

    /// The package name in the respective package manager.
    ///
    /// For npm this is the registry name, for Cargo the crate name.
    #[serde(rename = "package")]
    pub package_name: &'static str,
}

/// The routes a tool offers on one platform.
///
/// `Unavailable` is an explicit marker, distinct from an empty candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routes {
    Unavailable,
    /// Candidates in priority order; the first one whose manager is available wins.
    Candidates(&'static [PlatformInstall]),
}

impl Routes {
    pub fn candidates(&self) -> &'static [PlatformInstall] {
        match self {
            Routes::Unavailable => &[],
            Routes::Candidates(list) => *list,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Routes::Unavailable)
    }
}

impl Serialize for Routes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Routes::Unavailable => serializer.serialize_none(),
            Routes::Candidates(list) => serializer.collect_seq(list.iter()),
        }
    }
}
