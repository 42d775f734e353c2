//! Package managers and the install routes tools declare for them.
//!
//! # Architecture
//!
//! - [`PackageManager`]: Enum representing all supported package managers
//! - [`PlatformInstall`]: How to install a package with a specific manager
//! - [`Routes`]: A tool's ordered candidates on one platform, or an explicit
//!   "unavailable" marker
//! - [`InstallBatch`]: Resolved packages grouped per manager, ready to run
//!
//! # Priority
//!
//! Routes are tried in the order the catalog lists them. Native managers
//! (Homebrew, APT, Scoop) come first; Cargo compiles from source and is
//! listed last wherever it appears.

mod batch;
mod definition;
mod install;
mod manager;

pub use batch::InstallBatch;
pub use definition::{PlatformInstall, Routes};
pub use manager::PackageManager;

/// Build a [`Routes`] value from `Manager "package"` pairs.
///
/// ```ignore
/// routes![unavailable];
/// routes![Apt "ripgrep", Cargo "ripgrep"];
/// ```
#[macro_export]
macro_rules! routes {
    (unavailable) => {
        $crate::common::package::Routes::Unavailable
    };
    ($($manager:ident $package:literal),* $(,)?) => {
        $crate::common::package::Routes::Candidates(&[$(
            $crate::common::package::PlatformInstall {
                manager: $crate::common::package::PackageManager::$manager,
                package_name: $package,
            }
        ),*])
    };
}
