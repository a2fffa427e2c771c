//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.log_path.as_os_str().is_empty() {
        bail!("Invalid log_path: cannot be empty");
    }

    // Path will be created if it doesn't exist, so just check it's valid
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let config = Config {
            log_path: PathBuf::new(),
            ..Config::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("log_path"));
    }

    #[test]
    fn test_null_in_log_path_rejected() {
        let config = Config {
            log_path: PathBuf::from("logs\0dir"),
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }
}
