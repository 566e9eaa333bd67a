//! Persisted user preferences.
//!
//! Settings live in a single `config.toml` at
//! `~/.config/eventmark/config.toml` by default. The CLI reads them,
//! applies command-line overrides, and hands the renderer an explicit
//! [`eventmark_core::RenderConfig`] — the core never touches this file.

use std::path::{Path, PathBuf};

use eventmark_core::RenderStyle;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Persisted rendering preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render titles as markdown links back to the calendar.
    pub use_link: bool,

    /// Annotate list entries with a time range.
    pub use_time: bool,

    /// Default output style.
    pub style: RenderStyle,

    /// Default table columns (dotted field paths).
    pub columns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_link: true,
            use_time: true,
            style: RenderStyle::Bullet,
            columns: vec![".summary".to_string(), ".description".to_string()],
        }
    }
}

impl Settings {
    /// Loads settings from the default path, falling back to defaults
    /// when no file exists.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads settings from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventmark")
            .join("config.toml")
    }
}
