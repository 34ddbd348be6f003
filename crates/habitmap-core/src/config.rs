//! TOML-based rendering configuration.
//!
//! Stores:
//! - Quality multiplier and title length limit
//! - Intensity palette
//! - Label language
//! - Font location and family
//! - Default output directory
//!
//! Configuration is stored at `~/.config/habitmap/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, RenderError};
use crate::fonts::FontStore;
use crate::labels::Locale;
use crate::layout::{LayoutConfig, MAX_MULTIPLIER};
use crate::palette::Palette;
use crate::render::{Style, DEFAULT_TITLE_MAX_CHARS};

/// Returns `~/.config/habitmap[-dev]/` based on HABITMAP_ENV.
///
/// Set HABITMAP_ENV=dev to use a development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITMAP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitmap-dev")
    } else {
        base_dir.join("habitmap")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Rendering configuration.
///
/// Serialized to/from TOML at `~/.config/habitmap/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Quality multiplier applied to every length.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Titles longer than this are shortened with "...".
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    /// Five `#rrggbb` colors, level 0 first.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub locale: Locale,
    /// Font file or directory. System fonts when unset.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// Font family override. Must name a loaded face. A sans-serif text
    /// family is picked when unset.
    #[serde(default)]
    pub font_family: Option<String>,
    /// Where rendered images go when no explicit path is given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_multiplier() -> f64 {
    2.0
}
fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}
fn default_palette() -> Vec<String> {
    Palette::default()
        .colors()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            multiplier: default_multiplier(),
            title_max_chars: default_title_max_chars(),
            palette: default_palette(),
            locale: Locale::default(),
            font_path: None,
            font_family: None,
            output_dir: None,
        }
    }
}

impl RenderConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: RenderConfig = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from the default location, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Check values that TOML parsing alone cannot.
    ///
    /// # Errors
    ///
    /// Returns an error for a multiplier outside `(0, MAX_MULTIPLIER]`, a
    /// title limit too short for the ellipsis, or an invalid palette.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "multiplier".into(),
                message: format!("must be positive, got {}", self.multiplier),
            });
        }
        if self.multiplier > MAX_MULTIPLIER {
            return Err(ConfigError::InvalidValue {
                key: "multiplier".into(),
                message: format!("must be at most {MAX_MULTIPLIER}, got {}", self.multiplier),
            });
        }
        if self.title_max_chars < 4 {
            return Err(ConfigError::InvalidValue {
                key: "title_max_chars".into(),
                message: format!("must be at least 4, got {}", self.title_max_chars),
            });
        }
        Palette::from_hex(self.palette.as_slice())?;
        Ok(())
    }

    /// Visual style described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn style(&self) -> Result<Style, ConfigError> {
        self.validate()?;
        Ok(Style {
            layout: LayoutConfig::with_multiplier(self.multiplier),
            palette: Palette::from_hex(self.palette.as_slice())?,
            locale: self.locale,
            title_max_chars: self.title_max_chars,
            ..Style::default()
        })
    }

    /// Load the configured fonts.
    ///
    /// # Errors
    ///
    /// Returns an error if the font path is unreadable, no faces are found,
    /// or the configured family matches none of them.
    pub fn font_store(&self) -> Result<FontStore, RenderError> {
        let store = match &self.font_path {
            Some(path) => FontStore::from_path(path)?,
            None => FontStore::system()?,
        };
        match &self.font_family {
            Some(family) => store.with_family(family.clone()),
            None => Ok(store),
        }
    }
}
