use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_MAX_CANDIDATES: u32 = 1;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// request_timeout_secs = 10
/// language = "en"
/// max_candidates = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timeout applied to each outbound request. An absent or hung
    /// response fails instead of blocking indefinitely.
    pub request_timeout_secs: u64,

    /// Display language for geocoding results.
    pub language: String,

    /// How many geocoding candidates to request. The first match is
    /// always the one used; asking for more only enables the ambiguity
    /// warning when several places share a name.
    pub max_candidates: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: DEFAULT_LANGUAGE.to_owned(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path; missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
