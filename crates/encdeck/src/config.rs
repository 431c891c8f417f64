use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "encdeck";
const DEFAULT_PAGES_DIR: &str = "assets/ecosystem";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// "first", "overview", or a 1-based slide number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Directory holding the pre-rendered ecosystem PDF pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_dir: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `encdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# encdeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Directory the document page images are loaded from.
    pub fn pages_dir(&self) -> PathBuf {
        self.documents
            .as_ref()
            .and_then(|d| d.pages_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGES_DIR))
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.start_mode" => {
                if value != "first" && value != "overview" && value.parse::<usize>().is_err() {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first', 'overview', or a slide number."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(value.to_string());
            }
            "documents.pages_dir" => {
                if value.is_empty() {
                    anyhow::bail!("documents.pages_dir cannot be empty");
                }
                self.documents
                    .get_or_insert_with(DocumentsConfig::default)
                    .pages_dir = Some(PathBuf::from(value));
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.start_mode, documents.pages_dir"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_start_mode() {
        let mut config = Config::default();
        for value in ["first", "overview", "12"] {
            config.set("defaults.start_mode", value).unwrap();
            assert_eq!(
                config.defaults.as_ref().unwrap().start_mode.as_deref(),
                Some(value)
            );
        }
    }

    #[test]
    fn test_set_rejects_bad_start_mode() {
        let mut config = Config::default();
        assert!(config.set("defaults.start_mode", "sideways").is_err());
        assert!(config.defaults.is_none());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_err());
    }

    #[test]
    fn test_pages_dir_default_and_override() {
        let mut config = Config::default();
        assert_eq!(config.pages_dir(), PathBuf::from(DEFAULT_PAGES_DIR));
        config.set("documents.pages_dir", "/srv/deck/pages").unwrap();
        assert_eq!(config.pages_dir(), PathBuf::from("/srv/deck/pages"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.set("defaults.start_mode", "overview").unwrap();
        config.set("documents.pages_dir", "pages").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.pages_dir(), PathBuf::from("pages"));
        assert_eq!(
            parsed.defaults.unwrap().start_mode.as_deref(),
            Some("overview")
        );
    }
}
