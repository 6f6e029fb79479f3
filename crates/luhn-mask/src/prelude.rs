//! Convenient re-exports for common luhn-mask usage.
//!
//! # Example
//!
//! ```rust
//! use luhn_mask::prelude::*;
//!
//! let converter = LuhnMaskingConverter::from_config(&MaskingConfig::default())?;
//! assert_eq!(converter.convert("4222222222222"), "*MASKED**2222");
//! # Ok::<(), MaskError>(())
//! ```

// Scanning
pub use crate::scanner::{CardMatch, Masker, has_enough_digits, mask, mask_opt};

// Conversion
pub use crate::converter::{LuhnMaskingConverter, MessageConverter};
pub use crate::writer::MaskingWriter;
#[cfg(feature = "subscriber")]
pub use crate::writer::MaskingMakeWriter;

// Configuration
pub use crate::config::MaskingConfig;

// Error handling
pub use crate::error::{MaskError, Result};
