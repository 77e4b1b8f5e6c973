//! Configuration handling for the TUI

use crate::state::forms::{CurrencyStyle, Locale};
use crate::state::models::Location;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base URL
    pub api_base_url: Option<String>,
    /// Currency code for money fields (e.g. "NOK")
    pub currency: Option<String>,
    /// Display locale tag (e.g. "nb-NO")
    pub locale: Option<String>,
    /// Initial map zoom level
    pub map_zoom: Option<u8>,
    /// Initial map center as [longitude, latitude]
    pub map_center: Option<[f64; 2]>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "propmap", "propmap-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or("http://localhost:8000")
    }

    /// Currency style for money fields; unknown locale tags fall back to the
    /// default locale
    pub fn currency_style(&self) -> CurrencyStyle {
        let locale = self
            .locale
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_default();
        CurrencyStyle::new(self.currency.clone().unwrap_or_else(|| "NOK".into()), locale)
    }

    pub fn map_center(&self) -> Option<Location> {
        self.map_center
            .map(|[longitude, latitude]| Location::new(longitude, latitude))
    }
}
