//! Settings file: walker, source, handlers and species names

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wildwalk_client::SourceConfig;
use wildwalk_core::WalkerConfig;
use wildwalk_handlers::{HandlerConfig, SpeciesNames};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub walk: WalkerConfig,
    pub source: SourceConfig,
    pub handlers: Vec<HandlerConfig>,
    pub species: SpeciesNames,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walk: WalkerConfig::new(),
            source: SourceConfig::default(),
            handlers: vec![HandlerConfig::Log],
            species: SpeciesNames::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "settings file {} not found. Run `wildwalk init` to create one.",
                path.display()
            );
        }
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid settings {}: {}", path.display(), e))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, json.as_bytes())?;
        Ok(())
    }
}

/// Explicit path, or `~/.wildwalk/config.json`
pub fn resolve_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(wildwalk_core::default_config_path()?),
    }
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_through_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let mut settings = Settings::default();
        settings.walk.latitude = 35.6762;
        settings.species.insert(1, "Bulbasaur");
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"walk": {"latitude": 1.0, "longitude": 2.0}}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.walk.step_count, 5);
        assert_eq!(settings.handlers, vec![HandlerConfig::Log]);
        assert_eq!(settings.source, SourceConfig::default());
    }

    #[test]
    fn test_missing_settings_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Settings::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("wildwalk init"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = resolve_path(Some(Path::new("/tmp/x.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.json"));
    }
}
