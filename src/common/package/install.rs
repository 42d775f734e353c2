//! Package installation backends for each package manager.

use anyhow::{Context, Result, bail};
use duct::cmd;
use std::ffi::OsString;
use std::fs;

use super::PackageManager;
use crate::common::paths;

/// Scoop packages that live in the `extras` bucket rather than `main`.
const SCOOP_EXTRAS: &[&str] = &["lazygit", "delta", "bottom", "glow", "gum", "mkcert"];

/// Install packages by name using the specified package manager.
pub fn install_package_names(manager: PackageManager, packages: &[&str]) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    match manager {
        PackageManager::Brew => install_brew(packages),
        PackageManager::Npm => install_npm(packages),
        PackageManager::Apt => install_apt(packages),
        PackageManager::Scoop => install_scoop(packages),
        PackageManager::Cargo => install_cargo(packages),
    }
}

/// The command a user can run to retry a failed batch by hand.
pub fn retry_hint(manager: PackageManager, packages: &[&str]) -> String {
    match manager {
        PackageManager::Brew => format!("brew bundle --file {}", paths::brewfile_display()),
        other => other.install_hint(packages),
    }
}

/// Resolve a program through PATH so Windows `.cmd`/`.ps1` shims run too.
fn program(name: &str) -> OsString {
    which::which(name)
        .map(|p| p.into_os_string())
        .unwrap_or_else(|_| OsString::from(name))
}

pub fn generate_brewfile(packages: &[&str]) -> String {
    if packages.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = packages.iter().map(|p| format!("brew \"{}\"", p)).collect();
    lines.join("\n") + "\n"
}

/// Install packages with `brew bundle` from a generated Brewfile.
fn install_brew(packages: &[&str]) -> Result<()> {
    paths::ensure_base_dir()?;
    let brewfile = paths::brewfile_path()?;
    fs::write(&brewfile, generate_brewfile(packages))
        .with_context(|| format!("writing Brewfile to {}", brewfile.display()))?;

    cmd(program("brew"), ["bundle".into(), "--file".into(), brewfile.into_os_string()])
        .run()
        .context("Failed to install packages with brew bundle")?;

    Ok(())
}

/// Install global packages using npm.
fn install_npm(packages: &[&str]) -> Result<()> {
    let mut args = vec!["install", "-g"];
    args.extend(packages);

    cmd(program("npm"), &args)
        .run()
        .context("Failed to install packages with npm")?;

    Ok(())
}

/// Install packages using apt-get, refreshing the index first.
fn install_apt(packages: &[&str]) -> Result<()> {
    cmd!("sudo", "apt-get", "update", "-qq")
        .run()
        .context("Failed to update apt package index")?;

    let mut args = vec!["apt-get", "install", "-y", "-qq"];
    args.extend(packages);

    cmd("sudo", &args)
        .run()
        .context("Failed to install packages with apt-get")?;

    Ok(())
}

pub fn needs_extras_bucket(packages: &[&str]) -> bool {
    packages.iter().any(|p| SCOOP_EXTRAS.contains(p))
}

/// Install packages using scoop, adding the extras bucket when needed.
fn install_scoop(packages: &[&str]) -> Result<()> {
    let scoop = program("scoop");

    if needs_extras_bucket(packages) {
        // Fails when the bucket already exists
        let _ = cmd(&scoop, ["bucket", "add", "extras"]).run();
    }

    let mut args = vec!["install"];
    args.extend(packages);

    cmd(&scoop, &args)
        .run()
        .context("Failed to install packages with scoop")?;

    Ok(())
}

/// Install packages using cargo, one crate at a time.
fn install_cargo(packages: &[&str]) -> Result<()> {
    let cargo = program("cargo");
    let mut failed = Vec::new();

    for package in packages {
        if cmd(&cargo, ["install", *package]).run().is_err() {
            failed.push(*package);
        }
    }

    if !failed.is_empty() {
        bail!("cargo install failed for {}", failed.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_brewfile() {
        assert_eq!(
            generate_brewfile(&["ripgrep", "git-delta"]),
            "brew \"ripgrep\"\nbrew \"git-delta\"\n"
        );
        assert_eq!(generate_brewfile(&[]), "");
    }

    #[test]
    fn test_needs_extras_bucket() {
        assert!(needs_extras_bucket(&["jq", "lazygit"]));
        assert!(!needs_extras_bucket(&["jq", "ripgrep"]));
    }

    #[test]
    fn test_retry_hint() {
        assert_eq!(retry_hint(PackageManager::Npm, &["knip", "svgo"]), "npm install -g knip svgo");
        assert!(retry_hint(PackageManager::Brew, &["jq"]).starts_with("brew bundle --file "));
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        for manager in PackageManager::ALL {
            assert!(install_package_names(manager, &[]).is_ok());
        }
    }
}
