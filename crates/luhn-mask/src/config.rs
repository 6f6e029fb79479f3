//! Configuration for masking.
//!
//! Settings can come from code, a TOML or JSON file, or environment
//! variables prefixed with `LUHN_MASK_`:
//!
//! ```rust
//! use luhn_mask::MaskingConfig;
//!
//! let config = MaskingConfig::from_toml_str("min_digits = 15").unwrap();
//! assert!(config.enabled);
//! assert_eq!(config.min_digits, 15);
//! ```

pub mod env;
pub mod file;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MaskError, Result};
use crate::scanner::{MIN_CARD_DIGITS, TAIL_DIGITS};

pub use env::{DEFAULT_PREFIX, EnvConfig};
pub use file::ConfigFormat;

/// Masking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// Whether masking is applied at all.
    pub enabled: bool,
    /// Minimum digit count for a run to be considered a card number.
    pub min_digits: usize,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_digits: MIN_CARD_DIGITS,
        }
    }
}

impl MaskingConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether masking is enabled.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the minimum digit count.
    #[must_use]
    pub const fn min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = file::load(path)?;
        tracing::debug!(
            path = %path.display(),
            enabled = config.enabled,
            min_digits = config.min_digits,
            "loaded masking configuration"
        );
        Ok(config)
    }

    /// Load defaults overridden by `LUHN_MASK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env(&EnvConfig::default())
    }

    /// Override settings from environment variables.
    ///
    /// `ENABLED` accepts the usual boolean spellings and `MIN_DIGITS` a
    /// number. Any other value is rejected rather than ignored, so a typo
    /// never switches masking off.
    pub fn apply_env(mut self, reader: &EnvConfig) -> Result<Self> {
        if let Some(enabled) = reader.bool(env::vars::ENABLED)? {
            self.enabled = enabled;
        }
        if let Some(raw) = reader.get(env::vars::MIN_DIGITS) {
            self.min_digits = raw.trim().parse().map_err(|_| {
                MaskError::config(format!(
                    "{} must be a non-negative integer, got '{raw}'",
                    reader.var_name(env::vars::MIN_DIGITS)
                ))
            })?;
        }
        self.validate()?;
        tracing::debug!(
            enabled = self.enabled,
            min_digits = self.min_digits,
            "applied environment overrides"
        );
        Ok(self)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_digits < TAIL_DIGITS {
            return Err(MaskError::invalid_min_digits(self.min_digits, TAIL_DIGITS));
        }
        Ok(())
    }
}
