//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.json";

/// Palette column width used when the config does not set one
pub const DEFAULT_PALETTE_WIDTH: u16 = 22;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Width of the palette column in terminal cells
    pub palette_width: Option<u16>,
    /// Show the JSON panel under the preview
    pub show_json: Option<bool>,
    /// Insert palette drops at the hovered canvas position instead of appending
    pub insert_at_drop_position: Option<bool>,
}

impl TuiConfig {
    pub(crate) fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "form-builder", "form-builder-tui")
    }

    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path().filter(|path| path.exists()) else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Write configuration as pretty JSON, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn palette_width(&self) -> u16 {
        self.palette_width.unwrap_or(DEFAULT_PALETTE_WIDTH)
    }

    pub fn show_json(&self) -> bool {
        self.show_json.unwrap_or(true)
    }

    pub fn insert_at_drop_position(&self) -> bool {
        self.insert_at_drop_position.unwrap_or(false)
    }
}
