use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "geochat.toml";

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

/// Mapping service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the mapping service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

/// Artifact output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory rendered maps and images are written to
    #[serde(default = "default_artifacts_dir")]
    pub dir: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("maps")
}

impl ConfigFile {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `geochat.toml` from the working directory, if present.
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub artifacts_dir: PathBuf,
}

/// Resolve settings: CLI flags override the `GEOCHAT_SERVER` environment
/// variable, which overrides the config file, which has defaults.
pub fn resolve(server_flag: Option<String>, artifacts_flag: Option<PathBuf>) -> Result<Settings> {
    let file = ConfigFile::load_from_cwd()?.unwrap_or_default();

    let base_url = server_flag
        .or_else(|| std::env::var("GEOCHAT_SERVER").ok())
        .unwrap_or(file.server.base_url);

    let artifacts_dir = artifacts_flag.unwrap_or(file.artifacts.dir);

    Ok(Settings {
        base_url,
        artifacts_dir,
    })
}
