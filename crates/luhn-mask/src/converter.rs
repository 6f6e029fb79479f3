//! Message conversion for logging pipelines.
//!
//! A host formats a log message, hands the text to a [`MessageConverter`],
//! and emits whatever comes back. [`LuhnMaskingConverter`] is the converter
//! that masks card numbers.

use std::borrow::Cow;

use crate::config::MaskingConfig;
use crate::error::Result;
use crate::scanner::Masker;

/// Transforms one fully formatted message into the text to emit.
pub trait MessageConverter {
    /// Convert a message, borrowing it back when nothing changes.
    fn convert<'a>(&self, message: &'a str) -> Cow<'a, str>;

    /// Convert an optional message; an absent message stays absent.
    fn convert_opt<'a>(&self, message: Option<&'a str>) -> Option<Cow<'a, str>> {
        message.map(|m| self.convert(m))
    }
}

/// Converter that masks Luhn-valid card numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuhnMaskingConverter {
    masker: Masker,
    enabled: bool,
}

impl Default for LuhnMaskingConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl LuhnMaskingConverter {
    /// Create an enabled converter with the default threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_masker(Masker::new())
    }

    /// Create an enabled converter around a configured scanner.
    #[must_use]
    pub const fn with_masker(masker: Masker) -> Self {
        Self {
            masker,
            enabled: true,
        }
    }

    /// Create a converter from configuration.
    pub fn from_config(config: &MaskingConfig) -> Result<Self> {
        Ok(Self {
            masker: Masker::from_config(config)?,
            enabled: config.enabled,
        })
    }

    /// Whether this converter masks anything.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The underlying scanner.
    #[must_use]
    pub const fn masker(&self) -> &Masker {
        &self.masker
    }
}

impl MessageConverter for LuhnMaskingConverter {
    fn convert<'a>(&self, message: &'a str) -> Cow<'a, str> {
        if self.enabled {
            self.masker.mask(message)
        } else {
            Cow::Borrowed(message)
        }
    }
}
