use crate::error::{Error, Result};
use daygrid_engine::{AdjacentDays, MarkerSet, PickerOptions};
use daygrid_types::MarkerEntry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DAYGRID_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.daygrid.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DAYGRID_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("daygrid").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".daygrid.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the neighbouring months' days in otherwise blank slots
    #[serde(default)]
    pub adjacent_days: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerEntry>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(
            "loaded config from {} ({} markers)",
            path.display(),
            config.markers.len()
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Picker options from this config; `force_adjacent` wins over the file.
    pub fn picker_options(&self, force_adjacent: bool) -> PickerOptions {
        let adjacent_days = if force_adjacent || self.display.adjacent_days {
            AdjacentDays::Show
        } else {
            AdjacentDays::Blank
        };

        PickerOptions {
            adjacent_days,
            markers: MarkerSet::from_entries(&self.markers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daygrid_types::DayMarker;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.display.adjacent_days);
        assert!(config.markers.is_empty());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            display: DisplayConfig {
                adjacent_days: true,
            },
            markers: vec![MarkerEntry {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                marker: DayMarker {
                    sched_snapshot: 1,
                    alarm_video: 2,
                    ..Default::default()
                },
            }],
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_malformed_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[display\nadjacent_days = 1")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_picker_options() {
        let config = Config::default();
        assert_eq!(config.picker_options(false).adjacent_days, AdjacentDays::Blank);
        assert_eq!(config.picker_options(true).adjacent_days, AdjacentDays::Show);
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/daygrid-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/daygrid-test.toml"));
        Ok(())
    }
}
