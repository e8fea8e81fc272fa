use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transauditrc.json";

/// Placeholder replaced by the active locale in catalog patterns.
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_modules_root")]
    pub modules_root: String,
    #[serde(default = "default_module_prefix")]
    pub module_prefix: String,
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,
    /// Module that owns the audit; the audit refuses to run without it.
    #[serde(default = "default_tool_module")]
    pub tool_module: String,
    #[serde(default = "default_composer_file")]
    pub composer_file: String,
    /// Glob patterns matched against the vendor part of package names.
    #[serde(default = "default_first_party_vendors")]
    pub first_party_vendors: Vec<String>,
    /// Host catalog files, relative to the project root.
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_title() -> String {
    "Translations status".to_string()
}

fn default_modules_root() -> String {
    "modules_v4".to_string()
}

fn default_module_prefix() -> String {
    "myartjaub_".to_string()
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

fn default_tool_module() -> String {
    "_myartjaub_translationtool_".to_string()
}

fn default_composer_file() -> String {
    "composer.json".to_string()
}

fn default_first_party_vendors() -> Vec<String> {
    vec!["jon48".to_string()]
}

fn default_catalogs() -> Vec<String> {
    vec![format!("resources/lang/{}/messages.po", LOCALE_PLACEHOLDER)]
}

fn default_extensions() -> Vec<String> {
    ["php", "phtml"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/vendor/**/tests/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            title: default_title(),
            modules_root: default_modules_root(),
            module_prefix: default_module_prefix(),
            resources_dir: default_resources_dir(),
            tool_module: default_tool_module(),
            composer_file: default_composer_file(),
            first_party_vendors: default_first_party_vendors(),
            catalogs: default_catalogs(),
            extensions: default_extensions(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores` and `firstPartyVendors`, and
    /// an empty extension list.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        for pattern in &self.first_party_vendors {
            Pattern::new(pattern).with_context(|| {
                format!(
                    "Invalid glob pattern in 'firstPartyVendors': \"{}\"",
                    pattern
                )
            })?;
        }
        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            bail!("'extensions' must list at least one source file extension");
        }
        Ok(())
    }

    /// Catalog paths for `locale`, with the placeholder substituted.
    pub fn catalog_paths(&self, locale: &str) -> Vec<String> {
        self.catalogs
            .iter()
            .map(|pattern| pattern.replace(LOCALE_PLACEHOLDER, locale))
            .collect()
    }

    /// Extensions without a leading dot, lowercased.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
