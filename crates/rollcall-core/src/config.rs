//! User configuration
//!
//! Optional TOML file at `<config dir>/rollcall/config.toml`. A missing file
//! means defaults; anything present must parse and validate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selector::{AnimationTiming, DEFAULT_DURATION, DEFAULT_TICK};

/// Default theme name
pub const DEFAULT_THEME: &str = "rollcall";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub animation: AnimationConfig,
}

/// `[animation]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_ms: u64,
    pub duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK.as_millis() as u64,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

impl AnimationConfig {
    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            tick: Duration::from_millis(self.tick_ms),
            duration: Duration::from_millis(self.duration_ms),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rollcall").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), theme = %config.theme, "Loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.tick_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.theme.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "rollcall");
        assert_eq!(config.animation.timing(), AnimationTiming::default());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_override() {
        let config = Config::parse("[animation]\nduration_ms = 1500\n").unwrap();
        assert_eq!(config.theme, "rollcall");
        assert_eq!(config.animation.tick_ms, 100);
        assert_eq!(
            config.animation.timing().duration,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = Config::parse("[animation]\ntick_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "animation.tick_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::parse("theme = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "theme = \"terminal\"\n[animation]\ntick_ms = 50").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, "terminal");
        assert_eq!(config.animation.tick_ms, 50);
        assert_eq!(config.animation.duration_ms, 3000);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "animation = 3").unwrap();

        match Config::load_from(&path).unwrap_err() {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
