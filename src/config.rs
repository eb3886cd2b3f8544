use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Name spoken back to the user, when set.
    pub display_name: Option<String>,
    /// Family circle this device belongs to.
    pub circle: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { enabled: true, rate: 0.9 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { profile: ProfileConfig::default(), speech: SpeechConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "rappel", "rappel")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.speech.enabled);
        assert_eq!(config.speech.rate, 0.9);
        assert!(config.profile.display_name.is_none());
        assert!(config.profile.circle.is_none());
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let mut config = Config::default();
        config.profile.display_name = Some("Jeanne".to_string());
        config.save()?;

        let loaded = Config::load()?;
        assert_eq!(loaded.profile.display_name, Some("Jeanne".to_string()));
        assert_eq!(loaded.speech.enabled, config.speech.enabled);

        Ok(())
    }
}
