//! Error types for luhn-mask.
//!
//! Masking itself never fails: any string goes in, a string comes out.
//! The errors here come from the surrounding layers, namely loading and
//! validating configuration and the fallible checksum entry point.

use std::path::PathBuf;

use thiserror::Error;

/// Maximum number of input characters echoed back in a `NonDigit` message.
const MAX_INPUT_DISPLAY: usize = 32;

/// Format a non-digit error, pointing at the offending character.
fn format_non_digit_error(position: usize, found: char, input: &str) -> String {
    if input.len() <= MAX_INPUT_DISPLAY {
        format!(
            "expected only ASCII digits, found {found:?} at position {position}\n\
             \n\
             Input: '{input}'\n\
             \n\
             Tip: strip separators before computing the checksum"
        )
    } else {
        format!(
            "expected only ASCII digits, found {found:?} at position {position} \
             ({} byte input)\n\
             \n\
             Tip: strip separators before computing the checksum",
            input.len()
        )
    }
}

/// The main error type for luhn-mask operations.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A checksum was requested over a string containing a non-digit.
    #[error("{}", format_non_digit_error(*position, *found, input))]
    NonDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The character that is not an ASCII digit.
        found: char,
        /// The input that was being checked.
        input: String,
    },

    /// The configured digit threshold cannot hold the preserved suffix.
    #[error("invalid minimum digit count {value}: must be at least {floor}")]
    InvalidMinDigits {
        /// The rejected value.
        value: usize,
        /// The smallest accepted value.
        floor: usize,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A configuration file whose format could not be determined.
    #[error("unknown configuration format: {}", path.display())]
    UnknownFormat {
        /// The path of the file.
        path: PathBuf,
    },

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for luhn-mask operations.
pub type Result<T> = std::result::Result<T, MaskError>;

impl MaskError {
    /// Create a non-digit error.
    pub fn non_digit(position: usize, found: char, input: impl Into<String>) -> Self {
        Self::NonDigit {
            position,
            found,
            input: input.into(),
        }
    }

    /// Create an invalid minimum digit count error.
    #[must_use]
    pub const fn invalid_min_digits(value: usize, floor: usize) -> Self {
        Self::InvalidMinDigits { value, floor }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown format error.
    pub fn unknown_format(path: impl Into<PathBuf>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(result: std::io::Result<T>, context: impl Into<String>) -> Result<T> {
        result.map_err(|e| Self::io_context(context, e))
    }

    /// Check if this error originates from configuration handling.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::InvalidMinDigits { .. }
                | Self::UnknownFormat { .. }
                | Self::Toml(_)
                | Self::Json(_)
        )
    }
}
