//! luhn-mask: Payment card number masking for log messages
//!
//! This crate finds digit runs in free text that look like payment card
//! numbers (at least 13 digits, optionally split by spaces or hyphens,
//! passing the Luhn checksum) and replaces all but the last four digits with
//! a fixed `MASKED` label.
//!
//! # Features
//!
//! - **Single pass** over the message, no regex and no allocation when
//!   nothing is masked
//! - **Separator aware**: `5137 0049 8639 6403` and `5137-0049-8639-6403`
//!   are both recognised, and the clear-text suffix keeps its separators
//! - **Logging integration** through [`MessageConverter`], [`MaskingWriter`]
//!   and, with the `subscriber` feature, a `tracing-subscriber` `MakeWriter`
//! - **Configuration** from TOML, JSON or `LUHN_MASK_*` environment variables
//!
//! # Example
//!
//! ```rust
//! use luhn_mask::mask;
//!
//! assert_eq!(
//!     mask("5137 0049 8639 6403 and 5137 0049 8639 6404"),
//!     "****MASKED*****6403 and 5137 0049 8639 6404"
//! );
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod prelude;
pub mod scanner;
pub mod writer;

pub use config::{ConfigFormat, EnvConfig, MaskingConfig};
pub use converter::{LuhnMaskingConverter, MessageConverter};
pub use error::{MaskError, Result};
pub use luhn::{checked_luhn, luhn_check, strip_separators};
pub use mask::{MASK_LABEL, build_mask, mask_string};
pub use scanner::{
    CardMatch, MIN_CARD_DIGITS, Masker, has_enough_digits, has_enough_digits_opt, mask, mask_opt,
};
#[cfg(feature = "subscriber")]
pub use writer::MaskingMakeWriter;
pub use writer::MaskingWriter;
