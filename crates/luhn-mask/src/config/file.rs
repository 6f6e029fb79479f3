//! File-based configuration loading.

use std::path::{Path, PathBuf};

use super::MaskingConfig;
use crate::error::{MaskError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parse config content in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<MaskingConfig> {
    match format {
        ConfigFormat::Toml => MaskingConfig::from_toml_str(content),
        ConfigFormat::Json => MaskingConfig::from_json_str(content),
    }
}

/// Load a config file, detecting the format from its extension.
pub fn load(path: &Path) -> Result<MaskingConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| MaskError::unknown_format(path))?;
    let content = MaskError::with_io_context(
        std::fs::read_to_string(path),
        format!("reading config file {}", path.display()),
    )?;
    parse_config(&content, format)
}

/// Find the first existing `<name>.toml` or `<name>.json` in `search_paths`.
#[must_use]
pub fn find(search_paths: &[PathBuf], name: &str) -> Option<PathBuf> {
    search_paths.iter().find_map(|dir| {
        ["toml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|path| path.exists())
    })
}
