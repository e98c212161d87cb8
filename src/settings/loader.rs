//! Settings file loading
//!
//! Reads `PagerSettings` from YAML or JSON and validates them.

use super::types::PagerSettings;
use crate::error::{Result, ResultExt};
use std::fs;
use std::path::Path;

/// Serialization format of a settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Json,
}

impl SettingsFormat {
    /// Guess the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load settings from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file
pub fn load_settings(path: impl AsRef<Path>) -> Result<PagerSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
    let settings = load_settings_from_str(&content, SettingsFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), "Loaded pager settings");
    Ok(settings)
}

/// Load settings from a string in the given format
pub fn load_settings_from_str(content: &str, format: SettingsFormat) -> Result<PagerSettings> {
    let settings: PagerSettings = if content.trim().is_empty() {
        PagerSettings::default()
    } else {
        match format {
            SettingsFormat::Yaml => serde_yaml::from_str(content)?,
            SettingsFormat::Json => serde_json::from_str(content)?,
        }
    };

    settings.validate()?;
    Ok(settings)
}
