//! Configuration loading for dojo.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. User config (`~/.dojo/config.toml`)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The system runs with sensible defaults
//! when no config exists.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DojoError, Result};

/// Main configuration struct for dojo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Progress award configuration.
    pub progress: ProgressConfig,
}

/// Progress award configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// XP awarded per completed lesson.
    pub lesson_xp: u64,
}

/// Minimum valid lesson_xp value (a zero award would make badges the only
/// visible progress signal).
pub const MIN_LESSON_XP: u64 = 1;

impl ProgressConfig {
    /// Check if a lesson_xp value is valid (must be >= 1).
    pub fn is_valid_lesson_xp(value: u64) -> bool {
        value >= MIN_LESSON_XP
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { lesson_xp: 100 }
    }
}

impl Config {
    /// Load configuration with full precedence chain.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. User config (`~/.dojo/config.toml`)
    /// 3. Defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = config.merge(user_config);
        }

        config.apply_env_overrides();
        config
    }

    /// Load user config from `~/.dojo/config.toml`.
    fn load_user_config() -> Option<Config> {
        let home = dojo_home()?;
        let config_path = home.join("config.toml");
        Self::load_from_file(&config_path).ok()
    }

    /// Load config from a specific file path.
    fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| DojoError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| DojoError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // DOJO_LESSON_XP
        if let Ok(val) = env::var("DOJO_LESSON_XP") {
            match val.parse::<u64>() {
                Ok(n) => {
                    if ProgressConfig::is_valid_lesson_xp(n) {
                        self.progress.lesson_xp = n;
                    } else {
                        eprintln!(
                            "Warning: Invalid DOJO_LESSON_XP value '{}'. \
                            Must be >= {}. Using default '{}'.",
                            n, MIN_LESSON_XP, self.progress.lesson_xp
                        );
                    }
                }
                Err(_) => eprintln!(
                    "Warning: Invalid DOJO_LESSON_XP value '{}'. \
                    Expected a positive integer. Using default '{}'.",
                    val, self.progress.lesson_xp
                ),
            }
        }
    }

    /// Merge another config into this one.
    ///
    /// The `other` config takes precedence: each field of `other` that
    /// differs from the default is applied to `self`, enabling additive
    /// layering where each layer only specifies its customizations.
    fn merge(mut self, other: Config) -> Self {
        let default_progress = ProgressConfig::default();
        if other.progress.lesson_xp != default_progress.lesson_xp {
            self.progress.lesson_xp = other.progress.lesson_xp;
        }

        self
    }
}

/// Get the dojo home directory.
///
/// Checks `DOJO_HOME` environment variable first, then falls back to
/// `~/.dojo`.
///
/// If `DOJO_HOME` is set it must be non-empty; relative values are
/// canonicalized when possible. Invalid values are ignored and we fall back
/// to the default.
pub fn dojo_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("DOJO_HOME") {
        if home.is_empty() {
            tracing::warn!("DOJO_HOME is empty, using default");
        } else {
            let path = PathBuf::from(&home);
            if path.is_absolute() {
                return Some(path);
            }
            if let Ok(canonical) = path.canonicalize() {
                return Some(canonical);
            }
            tracing::warn!("DOJO_HOME is relative and doesn't exist, using as-is");
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return Some(home.join(".dojo"));
    }

    // Fallback for containerized/minimal environments without HOME
    let fallback_path = fallback_dojo_home();
    tracing::warn!(
        "HOME not set, using fallback location: {}",
        fallback_path.display()
    );
    Some(fallback_path)
}

/// Get fallback dojo home path when HOME is unavailable.
#[cfg(unix)]
fn fallback_dojo_home() -> PathBuf {
    use std::os::unix::fs::MetadataExt;
    // Get UID for unique temp directory
    let uid = std::fs::metadata("/").map(|m| m.uid()).unwrap_or(0);
    PathBuf::from(format!("/tmp/dojo-{}", uid))
}

/// Get fallback dojo home path when HOME is unavailable.
#[cfg(not(unix))]
fn fallback_dojo_home() -> PathBuf {
    std::env::temp_dir().join("dojo")
}

/// Get the progress file path.
///
/// Returns `<dojo_home>/progress.json`.
pub fn progress_path() -> Option<PathBuf> {
    dojo_home().map(|h| h.join("progress.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.progress.lesson_xp, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        let toml_content = r#"
[progress]
lesson_xp = 250
"#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(config.progress.lesson_xp, 250);
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = Config::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_override() {
        env::set_var("DOJO_LESSON_XP", "150");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.progress.lesson_xp, 150);

        env::remove_var("DOJO_LESSON_XP");
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_lesson_xp_ignored() {
        env::remove_var("DOJO_LESSON_XP");
        let default_xp = Config::default().progress.lesson_xp;

        env::set_var("DOJO_LESSON_XP", "0");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.progress.lesson_xp, default_xp);

        env::set_var("DOJO_LESSON_XP", "not-a-number");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.progress.lesson_xp, default_xp);

        env::remove_var("DOJO_LESSON_XP");
    }

    #[test]
    fn test_is_valid_lesson_xp() {
        assert!(ProgressConfig::is_valid_lesson_xp(1));
        assert!(ProgressConfig::is_valid_lesson_xp(100));
        assert!(ProgressConfig::is_valid_lesson_xp(10_000));

        assert!(!ProgressConfig::is_valid_lesson_xp(0));
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();

        let override_config = Config {
            progress: ProgressConfig { lesson_xp: 500 },
        };

        let merged = base.merge(override_config);

        assert_eq!(merged.progress.lesson_xp, 500);
    }

    #[test]
    fn test_merge_with_explicit_defaults_does_not_block_overrides() {
        // A user config that restates the default must not shadow a later
        // layer's customization.
        let base = Config {
            progress: ProgressConfig { lesson_xp: 250 },
        };
        let restated_default = Config::default();

        let merged = base.merge(restated_default);

        assert_eq!(merged.progress.lesson_xp, 250);
    }

    #[test]
    #[serial]
    fn test_dojo_home_with_env() {
        let dir = TempDir::new().unwrap();
        env::set_var("DOJO_HOME", dir.path().to_str().unwrap());

        let home = dojo_home().unwrap();
        assert_eq!(home, dir.path());

        env::remove_var("DOJO_HOME");
    }

    #[test]
    #[serial]
    fn test_dojo_home_fallback() {
        env::remove_var("DOJO_HOME");

        let home = dojo_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".dojo"));
    }

    #[test]
    #[serial]
    fn test_dojo_home_empty_env() {
        env::set_var("DOJO_HOME", "");

        let home = dojo_home();
        assert!(home.is_some());
        assert!(home.unwrap().ends_with(".dojo"));

        env::remove_var("DOJO_HOME");
    }

    #[test]
    #[serial]
    fn test_progress_path() {
        let dir = TempDir::new().unwrap();
        env::set_var("DOJO_HOME", dir.path().to_str().unwrap());

        let path = progress_path().unwrap();
        assert_eq!(path, dir.path().join("progress.json"));

        env::remove_var("DOJO_HOME");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            progress: ProgressConfig { lesson_xp: 75 },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.progress.lesson_xp, 100);
    }
}
