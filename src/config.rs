use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

const APP_DIR: &str = "overlay-menu";

/// Runtime settings, read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Rows visible at once in the top-level menu
    pub top_capacity: usize,
    /// Rows visible at once in nested lists
    pub nested_capacity: usize,
    /// Input poll interval per frame
    pub frame_ms: u64,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            top_capacity: 10,
            nested_capacity: 15,
            frame_ms: 16,
            log_filter: "overlay_menu=info".to_string(),
            log_dir: None,
        }
    }
}

impl MenuConfig {
    /// `<config dir>/overlay-menu/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| MenuError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| MenuError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Load `explicit` if given, else the default path if it exists, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_capacity == 0 {
            return Err(MenuError::Config("top_capacity must be at least 1".to_string()));
        }
        if self.nested_capacity == 0 {
            return Err(MenuError::Config("nested_capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Directory for log files, falling back to the cache dir, then temp
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.top_capacity, 10);
        assert_eq!(config.nested_capacity, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MenuConfig::from_json(r#"{ "top_capacity": 8 }"#).unwrap();
        assert_eq!(config.top_capacity, 8);
        assert_eq!(config.nested_capacity, 15);
        assert_eq!(config.frame_ms, 16);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = MenuConfig::from_json(r#"{ "nested_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, MenuError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(MenuConfig::from_json("{ top_capacity").is_err());
    }

    #[test]
    fn test_explicit_log_dir() {
        let config = MenuConfig {
            log_dir: Some(PathBuf::from("/tmp/menu-logs")),
            ..Default::default()
        };
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/tmp/menu-logs"));
    }
}
