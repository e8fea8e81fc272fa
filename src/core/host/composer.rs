//! First-party packages from Composer metadata.
//!
//! Reads the project's `composer.json` for the vendor directory, then the
//! installed package list that Composer writes to
//! `<vendor>/composer/installed.json`. Both the Composer 1 layout (a bare
//! array) and the Composer 2 layout (`{"packages": [...]}`) are accepted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;
use serde_json::Value;

use crate::core::host::{PackageInfo, PackageRepository};

const DEFAULT_VENDOR_DIR: &str = "vendor";

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    config: ComposerConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerConfig {
    #[serde(rename = "vendor-dir")]
    vendor_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstalledPackages {
    Composer2 { packages: Vec<InstalledPackage> },
    Composer1(Vec<InstalledPackage>),
}

impl InstalledPackages {
    fn into_packages(self) -> Vec<InstalledPackage> {
        match self {
            Self::Composer2 { packages } | Self::Composer1(packages) => packages,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InstalledPackage {
    name: String,
    /// Relative to `<vendor>/composer/` (Composer 2 only).
    #[serde(rename = "install-path")]
    install_path: Option<String>,
    #[serde(default)]
    autoload: Autoload,
    #[serde(default)]
    extra: Value,
}

#[derive(Debug, Default, Deserialize)]
struct Autoload {
    #[serde(rename = "psr-4", default)]
    psr4: serde_json::Map<String, Value>,
}

impl InstalledPackage {
    fn installer_name(&self) -> Option<String> {
        self.extra
            .get("installer-name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    }

    /// psr-4 roots in declaration order; each namespace maps to one path or a list.
    fn psr4_paths(&self) -> Vec<&str> {
        self.autoload
            .psr4
            .values()
            .flat_map(|paths| match paths {
                Value::String(path) => vec![path.as_str()],
                Value::Array(list) => list.iter().filter_map(Value::as_str).collect(),
                _ => vec![],
            })
            .collect()
    }
}

/// Packages whose vendor matches one of the first-party vendor patterns.
#[derive(Debug, Clone)]
pub struct ComposerRepository {
    manifest_path: PathBuf,
    vendors: Vec<Pattern>,
}

impl ComposerRepository {
    pub fn new(manifest_path: impl Into<PathBuf>, vendors: &[String]) -> Result<Self> {
        let vendors = vendors
            .iter()
            .map(|v| Pattern::new(v).with_context(|| format!("Invalid vendor pattern: \"{}\"", v)))
            .collect::<Result<_>>()?;
        Ok(Self {
            manifest_path: manifest_path.into(),
            vendors,
        })
    }

    fn is_first_party(&self, package_name: &str) -> bool {
        let vendor = package_name.split('/').next().unwrap_or(package_name);
        self.vendors.iter().any(|p| p.matches(vendor))
    }

    fn vendor_dir(&self) -> Result<PathBuf> {
        let content = fs::read_to_string(&self.manifest_path)
            .with_context(|| format!("Failed to read {:?}", self.manifest_path))?;
        let manifest: ComposerManifest = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", self.manifest_path))?;
        let project_dir = self.manifest_path.parent().unwrap_or(Path::new("."));
        Ok(project_dir.join(
            manifest
                .config
                .vendor_dir
                .as_deref()
                .unwrap_or(DEFAULT_VENDOR_DIR),
        ))
    }
}

impl PackageRepository for ComposerRepository {
    fn first_party_packages(&self) -> Result<Vec<PackageInfo>> {
        let vendor_dir = self.vendor_dir()?;
        let composer_dir = vendor_dir.join("composer");
        let installed_path = composer_dir.join("installed.json");
        let content = fs::read_to_string(&installed_path)
            .with_context(|| format!("Failed to read {:?}", installed_path))?;
        let installed: InstalledPackages = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", installed_path))?;

        Ok(installed
            .into_packages()
            .into_iter()
            .filter(|package| self.is_first_party(&package.name))
            .map(|package| {
                let install_dir = match &package.install_path {
                    Some(path) => composer_dir.join(path),
                    None => vendor_dir.join(&package.name),
                };
                PackageInfo {
                    installer_name: package.installer_name(),
                    autoload_roots: package
                        .psr4_paths()
                        .into_iter()
                        .map(|p| install_dir.join(p))
                        .collect(),
                    name: package.name,
                }
            })
            .collect())
    }
}
