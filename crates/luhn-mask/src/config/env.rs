//! Environment-based configuration.

use std::collections::HashMap;

use crate::error::{MaskError, Result};

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "LUHN_MASK";

/// Environment variable reader.
///
/// Values set through [`EnvConfig::set`] shadow the process environment for
/// this reader only; the process environment is never written.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Local overrides, keyed by full variable name.
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Create without a prefix.
    #[must_use]
    pub fn no_prefix() -> Self {
        Self::new(String::new())
    }

    /// Build the full environment variable name.
    #[must_use]
    pub fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
    }

    /// Get a parsed value.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Get a boolean value.
    ///
    /// Only the usual true and false spellings are accepted; anything else
    /// is an error naming the variable.
    pub fn bool(&self, name: &str) -> Result<Option<bool>> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };

        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" | "enabled" => Ok(Some(true)),
            "0" | "false" | "no" | "off" | "disabled" => Ok(Some(false)),
            _ => Err(MaskError::config(format!(
                "{} must be a boolean (true/false, yes/no, on/off, 1/0), got '{raw}'",
                self.var_name(name)
            ))),
        }
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Shadow a variable for this reader.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let var_name = self.var_name(name);
        self.overrides.insert(var_name, value.into());
    }

    /// Drop a shadowed value, falling back to the process environment.
    pub fn unset(&mut self, name: &str) {
        let var_name = self.var_name(name);
        self.overrides.remove(&var_name);
    }
}

/// Recognised variable names, relative to the prefix.
pub mod vars {
    /// Turns masking on or off.
    pub const ENABLED: &str = "ENABLED";
    /// Minimum digit count.
    pub const MIN_DIGITS: &str = "MIN_DIGITS";
}
