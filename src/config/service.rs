//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path used by `init`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("main-push-guard")
            .join("config.toml")
    }

    /// Load configuration.
    ///
    /// With no `path`, returns the built-in defaults without touching the
    /// filesystem. With a `path`, the file must exist and parse. Log path
    /// defaults to a `logs` directory beside the config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Config> {
        let mut config: Config = toml::from_str(content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // log_path equal to the general default means it wasn't set in the file
        if config.log_path == default_log_path_for_config_dir(None) {
            config.log_path = default_log_path_for_config_dir(path.parent());
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<PathBuf> {
        let path = Self::default_path();
        Self::generate_at(&path)?;
        Ok(path)
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> &'static str {
        r#"# main-push-guard configuration file
#
# Pass this file with `main-push-guard --config <path>`.
# The guarded pattern (direct pushes to `main`) is built in and not configurable.

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as this file/logs)
# log_path = "~/.config/main-push-guard/logs"
"#
    }
}
