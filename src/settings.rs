use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DukaError, Result};
use crate::listview::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub shop_name: String,
    #[serde(default = "default_page_size")]
    pub expense_page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: String::new(),
            expense_page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Page size with the zero-is-invalid contract enforced at the trust
    /// boundary: a hand-edited settings file never reaches the pager as 0.
    pub fn page_size(&self) -> usize {
        if self.expense_page_size == 0 {
            default_page_size()
        } else {
            self.expense_page_size
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("duka")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| DukaError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            shop_name: "Merkato Mini Market".to_string(),
            expense_page_size: 6,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.shop_name, "Merkato Mini Market");
        assert_eq!(loaded.expense_page_size, 6);
    }

    #[test]
    fn test_defaults_when_missing_fields() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert!(s.shop_name.is_empty());
        assert_eq!(s.expense_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let s = Settings {
            shop_name: String::new(),
            expense_page_size: 0,
        };
        assert_eq!(s.page_size(), DEFAULT_PAGE_SIZE);
    }
}
