//! Configuration loaded from nextshift.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "nextshift.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub intake: IntakeConfig,
}

/// Incremental analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pause between two files, in milliseconds
    #[serde(default = "default_file_delay_ms")]
    pub file_delay_ms: u64,

    /// Pause after the last file before stats are published, in milliseconds
    #[serde(default = "default_finalize_delay_ms")]
    pub finalize_delay_ms: u64,

    /// Extensions that mark a file as a component for the preview
    #[serde(default = "default_component_extensions")]
    pub component_extensions: Vec<String>,

    /// File name fragments that mark a file as a component for the preview
    #[serde(default = "default_component_markers")]
    pub component_markers: Vec<String>,
}

/// Route discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Pages router directory (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// App router directory (default: "app")
    #[serde(default = "default_app_dir")]
    pub app_dir: String,

    /// Extensions of route modules
    #[serde(default = "default_route_extensions")]
    pub extensions: Vec<String>,
}

/// Directory walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Directory names never descended into
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Upper bound on the number of files taken from a walk
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

// Default values
fn default_file_delay_ms() -> u64 {
    100
}

fn default_finalize_delay_ms() -> u64 {
    100
}

fn default_component_extensions() -> Vec<String> {
    vec!["tsx".to_string(), "jsx".to_string()]
}

fn default_component_markers() -> Vec<String> {
    vec!["page".to_string(), "component".to_string()]
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_app_dir() -> String {
    "app".to_string()
}

fn default_route_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_ignore_dirs() -> Vec<String> {
    ["node_modules", ".git", ".next", "dist"]
        .iter()
        .map(|dir| dir.to_string())
        .collect()
}

fn default_max_files() -> usize {
    10_000
}

// Default implementations
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_delay_ms: default_file_delay_ms(),
            finalize_delay_ms: default_finalize_delay_ms(),
            component_extensions: default_component_extensions(),
            component_markers: default_component_markers(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            app_dir: default_app_dir(),
            extensions: default_route_extensions(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
            max_files: default_max_files(),
        }
    }
}

impl AnalysisConfig {
    /// Config with both pauses disabled
    pub fn without_delays() -> Self {
        Self {
            file_delay_ms: 0,
            finalize_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn file_delay(&self) -> Duration {
        Duration::from_millis(self.file_delay_ms)
    }

    pub fn finalize_delay(&self) -> Duration {
        Duration::from_millis(self.finalize_delay_ms)
    }

    /// Checks the preview heuristic against a bare file name
    ///
    /// Matches on extension (case-insensitive) or on a marker anywhere in the name.
    pub fn is_component_like(&self, file_name: &str, extension: &str) -> bool {
        self.component_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
            || self
                .component_markers
                .iter()
                .any(|marker| file_name.contains(marker.as_str()))
    }
}

impl IntakeConfig {
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        name.to_str()
            .map_or(false, |name| self.ignore_dirs.iter().any(|dir| dir == name))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./nextshift.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Apply `NEXTSHIFT_FILE_DELAY_MS` and `NEXTSHIFT_FINALIZE_DELAY_MS`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var("NEXTSHIFT_FILE_DELAY_MS") {
            self.analysis.file_delay_ms = value
                .parse()
                .with_context(|| format!("Invalid NEXTSHIFT_FILE_DELAY_MS: {value:?}"))?;
        }

        if let Ok(value) = std::env::var("NEXTSHIFT_FINALIZE_DELAY_MS") {
            self.analysis.finalize_delay_ms = value
                .parse()
                .with_context(|| format!("Invalid NEXTSHIFT_FINALIZE_DELAY_MS: {value:?}"))?;
        }

        Ok(self)
    }

    /// Render as TOML, as written by `nextshift init`
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
