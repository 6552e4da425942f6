//! Configuration management (config.toml)
//!
//! Settings are read from an explicit `--config` path, or from `config.toml`
//! in the platform-specific config directory. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracking_record::FpTrapConfig;

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Floating-point trap settings
    #[serde(default)]
    pub fp: FpConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Floating-point exception handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpConfig {
    /// Trap on divide-by-zero, invalid and overflow (default: true)
    #[serde(default = "default_true")]
    pub trap_exceptions: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when RUST_LOG is unset (default: "warn")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for FpConfig {
    fn default() -> Self {
        Self {
            trap_exceptions: default_true(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Trap configuration after applying the `--no-fp-traps` override
    pub fn fp_traps(&self, no_fp_traps: bool) -> FpTrapConfig {
        FpTrapConfig {
            enabled: self.fp.trap_exceptions && !no_fp_traps,
        }
    }
}

/// A loaded configuration plus anything worth warning about once logging is up
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<String>,
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/tracking`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "tracking", "tracking")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load configuration.
///
/// An explicit path must exist and parse. The default location is optional:
/// a missing file yields defaults, an unparsable one yields defaults plus a
/// warning.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        return Ok(LoadedConfig {
            config,
            warnings: Vec::new(),
        });
    }

    let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
        return Ok(LoadedConfig::default());
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(LoadedConfig::default());
    };

    Ok(match toml::from_str(&content) {
        Ok(config) => LoadedConfig {
            config,
            warnings: Vec::new(),
        },
        Err(e) => LoadedConfig {
            config: Config::default(),
            warnings: vec![format!(
                "ignoring unparsable config {}: {}",
                path.display(),
                e
            )],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.fp.trap_exceptions);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[fp]\ntrap_exceptions = false\n").unwrap();
        assert!(!config.fp.trap_exceptions);
        assert_eq!(config.log, LogConfig::default());

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            fp: FpConfig {
                trap_exceptions: false,
            },
            log: LogConfig {
                filter: "tracking_record=trace".to_string(),
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_fp_override() {
        let config = Config::default();
        assert!(config.fp_traps(false).enabled);
        assert!(!config.fp_traps(true).enabled);

        let config = Config {
            fp: FpConfig {
                trap_exceptions: false,
            },
            ..Config::default()
        };
        assert!(!config.fp_traps(false).enabled);
    }

    #[test]
    fn test_load_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nfilter = \"debug\"\n").unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.config.log.filter, "debug");
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_load_explicit_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("missing.toml"))).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[fp]\ntrap_exceptions = \"maybe\"\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
