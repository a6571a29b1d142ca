// SPDX-License-Identifier: MIT

//! Sequential package checks. Each check appends human-readable problems;
//! only unreadable/unparseable input is a hard error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directories that exist only for development and must not be exported.
const DEV_DIRS: &[&str] = &["build", "doc", "docs", "tests", "benches"];

#[derive(Deserialize)]
struct Manifest {
    package: Option<Package>,
    workspace: Option<Workspace>,
}

#[derive(Deserialize)]
struct Package {
    name: Option<String>,
    // `edition`/`license` may be a string or `{ workspace = true }`;
    // presence is what's checked.
    edition: Option<toml::Value>,
    license: Option<toml::Value>,
    include: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct Workspace {
    members: Option<Vec<String>>,
}

/// Run all checks against `root`; returns the problems found.
pub fn run(root: &Path) -> Result<Vec<String>> {
    let mut problems = Vec::new();
    let dev_dirs: Vec<&str> =
        DEV_DIRS.iter().copied().filter(|dir| root.join(dir).is_dir()).collect();
    check_gitattributes(root, &dev_dirs, &mut problems);
    check_manifest(root, &dev_dirs, &mut problems)?;
    Ok(problems)
}

fn check_gitattributes(root: &Path, dev_dirs: &[&str], problems: &mut Vec<String>) {
    if dev_dirs.is_empty() {
        return;
    }
    let path = root.join(".gitattributes");
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(_) => {
            problems.push(".gitattributes file is missing".to_string());
            return;
        }
    };

    for dir in dev_dirs {
        let wanted = format!("/{dir} export-ignore");
        if !data.lines().any(|line| line.trim() == wanted) {
            problems.push(format!("'{wanted}' is missing in .gitattributes"));
        }
    }

    // Every export-ignore entry must point at something that exists.
    for line in data.lines() {
        if let Some(entry) = line.trim().strip_suffix(" export-ignore") {
            let rel = entry.trim().trim_start_matches('/');
            if !rel.contains('*') && !root.join(rel).exists() {
                problems.push(format!("'{entry}' is export-ignored but does not exist"));
            }
        }
    }
}

fn check_manifest(root: &Path, dev_dirs: &[&str], problems: &mut Vec<String>) -> Result<()> {
    let path = root.join("Cargo.toml");
    let manifest = read_manifest(&path)?;

    if manifest.package.is_none() && manifest.workspace.is_none() {
        problems.push("Cargo.toml has neither [package] nor [workspace]".to_string());
        return Ok(());
    }

    if let Some(workspace) = &manifest.workspace {
        for member in workspace.members.as_deref().unwrap_or_default() {
            if member.contains('*') {
                // Globs are cargo's problem; only literal members are checked.
                continue;
            }
            let member_path = root.join(member).join("Cargo.toml");
            if !member_path.is_file() {
                problems.push(format!("workspace member '{member}' has no Cargo.toml"));
                continue;
            }
            let member_manifest = read_manifest(&member_path)?;
            check_package(&member_manifest, member, dev_dirs, problems);
        }
    }

    if manifest.package.is_some() {
        check_package(&manifest, "the root package", dev_dirs, problems);
    }
    Ok(())
}

fn read_manifest(path: &Path) -> Result<Manifest> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("wrong contents of {}", path.display()))
}

fn check_package(manifest: &Manifest, who: &str, dev_dirs: &[&str], problems: &mut Vec<String>) {
    let Some(package) = &manifest.package else {
        problems.push(format!("'package' section is missing in {who}"));
        return;
    };
    let name = package.name.clone().unwrap_or_else(|| who.to_string());
    if package.name.is_none() {
        problems.push(format!("'name' is missing for {who}"));
    }
    if package.edition.is_none() {
        problems.push(format!("'edition' is missing for package '{name}'"));
    }
    if package.license.is_none() {
        problems.push(format!("'license' is missing for package '{name}'"));
    }
    if let Some(include) = &package.include {
        for entry in include {
            let top = entry.trim_start_matches('/').split('/').next().unwrap_or_default();
            if dev_dirs.contains(&top) {
                problems.push(format!(
                    "dev directory '{top}' should not be listed in 'include' of package '{name}'"
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
