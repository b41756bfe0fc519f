//! Persisted panel settings (panel.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tintwork::color::Color;

use crate::error::Result;

// Default value functions for serde
fn default_true() -> bool {
    true
}
fn default_intensity() -> f32 {
    1.0
}
fn default_fallback_hex() -> String {
    "#808080".to_string()
}

/// Settings the panel starts from each time it is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Push confirmed colors to symmetry counterparts as well
    #[serde(default = "default_true")]
    pub apply_to_symmetry: bool,
    /// Start in hex input mode instead of decimal byte fields
    #[serde(default)]
    pub hex_input: bool,
    /// Light intensity multiplier applied on write, clamped to 0.0-1.0
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// Preview color used while no light color has been loaded
    #[serde(default = "default_fallback_hex")]
    pub fallback_hex: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            apply_to_symmetry: true,
            hex_input: false,
            intensity: default_intensity(),
            fallback_hex: default_fallback_hex(),
        }
    }
}

impl PanelConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("Tintwork").join("panel.toml"))
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.is_file()) else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            tracing::warn!("No config directory available, settings not saved");
            return Ok(());
        };
        self.save_to(&path)
    }

    /// The fallback preview color, or gray if `fallback_hex` is malformed
    pub fn fallback_color(&self) -> Color {
        Color::from_hex(&self.fallback_hex).unwrap_or_else(|e| {
            tracing::warn!("Invalid fallback color {:?}: {}", self.fallback_hex, e);
            Color::GRAY
        })
    }
}
