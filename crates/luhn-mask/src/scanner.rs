//! Single-pass scanner that masks card numbers inside free text.
//!
//! A candidate run is a stretch of ASCII digits that may contain spaces and
//! hyphens. Any other character closes the run. A closed run whose digit
//! count reaches the threshold and whose digits pass the Luhn check is
//! replaced by a mask, keeping the span that starts at its fourth-to-last
//! digit in clear text.
//!
//! # Example
//!
//! ```rust
//! use luhn_mask::mask;
//!
//! let masked = mask("try 5137 0049 8639 6404 and 5137 0049 8639 6403");
//! assert_eq!(masked, "try 5137 0049 8639 6404 and ****MASKED*****6403");
//! ```

pub mod tail;

use std::borrow::Cow;

use crate::config::MaskingConfig;
use crate::error::{MaskError, Result};
use crate::luhn::{is_separator, luhn_check, strip_separators};
use crate::mask::mask_for_length;

pub use tail::{TAIL_DIGITS, TailPositions};

/// The minimum number of digits a payment card number can have.
pub const MIN_CARD_DIGITS: usize = 13;

/// Default scanner, using [`MIN_CARD_DIGITS`].
const DEFAULT_MASKER: Masker = Masker::new();

/// A qualifying run found in a message.
///
/// All offsets are byte offsets into the scanned message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMatch {
    /// Offset of the first digit.
    pub start: usize,
    /// End of the run.
    ///
    /// For a run closed by a later character this is one past its last
    /// digit. For a run still open at the end of the message it is the
    /// message length, so trailing separators belong to the run.
    pub end: usize,
    /// Offset of the first of the last four digits.
    pub unmasked_start: usize,
    /// Number of digits in the run, separators excluded.
    pub digits: usize,
}

impl CardMatch {
    /// Length of the run in bytes, separators included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the run is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span replaced by the mask.
    #[must_use]
    pub const fn masked_len(&self) -> usize {
        self.unmasked_start - self.start
    }

    /// The clear-text suffix of this run within `message`.
    #[must_use]
    pub fn unmasked<'a>(&self, message: &'a str) -> &'a str {
        &message[self.unmasked_start..self.end]
    }
}

/// Card number masking scanner.
///
/// Holds only the digit threshold, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masker {
    min_digits: usize,
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

impl Masker {
    /// Create a scanner with the default threshold of [`MIN_CARD_DIGITS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_digits: MIN_CARD_DIGITS,
        }
    }

    /// Create a scanner with a custom digit threshold.
    ///
    /// The threshold must leave room for the [`TAIL_DIGITS`] clear-text
    /// digits.
    pub fn with_min_digits(min_digits: usize) -> Result<Self> {
        if min_digits < TAIL_DIGITS {
            return Err(MaskError::invalid_min_digits(min_digits, TAIL_DIGITS));
        }
        Ok(Self { min_digits })
    }

    /// Create a scanner from configuration.
    pub fn from_config(config: &MaskingConfig) -> Result<Self> {
        Self::with_min_digits(config.min_digits)
    }

    /// The digit threshold.
    #[must_use]
    pub const fn min_digits(&self) -> usize {
        self.min_digits
    }

    /// Quick check for a run long enough to be a card number.
    ///
    /// Counts digits, resetting on anything that is neither a digit nor a
    /// separator. Does not run the checksum, so `true` only means masking
    /// might change the message.
    #[must_use]
    pub fn has_enough_digits(&self, message: &str) -> bool {
        let mut digits = 0;

        for b in message.bytes() {
            if b.is_ascii_digit() {
                digits += 1;
                if digits == self.min_digits {
                    return true;
                }
            } else if digits > 0 && !is_separator(b) {
                digits = 0;
            }
        }

        false
    }

    /// Find every qualifying run in `message`, in order.
    #[must_use]
    pub fn find_runs(&self, message: &str) -> Vec<CardMatch> {
        let mut runs = Vec::new();
        if self.has_enough_digits(message) {
            self.scan(message, |m| runs.push(m));
        }
        runs
    }

    /// Mask every qualifying run in `message`.
    ///
    /// Returns the input borrowed when nothing was masked.
    #[must_use]
    pub fn mask<'a>(&self, message: &'a str) -> Cow<'a, str> {
        if !self.has_enough_digits(message) {
            return Cow::Borrowed(message);
        }

        let mut masked: Option<String> = None;
        let mut unwritten_start = 0;

        self.scan(message, |m| {
            let out = masked.get_or_insert_with(|| String::with_capacity(message.len()));
            out.push_str(&message[unwritten_start..m.start]);
            out.push_str(&mask_for_length(m.masked_len()));
            out.push_str(m.unmasked(message));
            unwritten_start = m.end;
        });

        match masked {
            Some(mut out) => {
                out.push_str(&message[unwritten_start..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(message),
        }
    }

    /// Mask an optional message; an absent message stays absent.
    #[must_use]
    pub fn mask_opt<'a>(&self, message: Option<&'a str>) -> Option<Cow<'a, str>> {
        message.map(|m| self.mask(m))
    }

    /// Walk `message` once, reporting each qualifying run to `on_match`.
    fn scan(&self, message: &str, mut on_match: impl FnMut(CardMatch)) {
        let mut number_start: Option<usize> = None;
        let mut digits_seen = 0;
        let mut tail = TailPositions::new();

        for (pos, b) in message.bytes().enumerate() {
            if b.is_ascii_digit() {
                digits_seen += 1;
                number_start.get_or_insert(pos);
                tail.push(pos);
            } else if digits_seen > 0 && !is_separator(b) {
                if let (Some(start), Some(last)) = (number_start, tail.newest()) {
                    if let Some(m) = self.qualify(message, start, last + 1, digits_seen, &tail) {
                        on_match(m);
                    }
                }
                number_start = None;
                digits_seen = 0;
                tail.clear();
            }
        }

        // A run still open at the end extends to the end of the message.
        if let Some(start) = number_start {
            if let Some(m) = self.qualify(message, start, message.len(), digits_seen, &tail) {
                on_match(m);
            }
        }
    }

    /// Apply the length and checksum criteria to a closed run.
    fn qualify(
        &self,
        message: &str,
        start: usize,
        end: usize,
        digits: usize,
        tail: &TailPositions,
    ) -> Option<CardMatch> {
        if digits < self.min_digits {
            return None;
        }
        if !luhn_check(&strip_separators(&message[start..end])) {
            return None;
        }

        let unmasked_start = tail.oldest()?;
        tracing::trace!(start, end, digits, "masking card number");

        Some(CardMatch {
            start,
            end,
            unmasked_start,
            digits,
        })
    }
}

/// Mask every qualifying run in `message` using the default threshold.
#[must_use]
pub fn mask(message: &str) -> Cow<'_, str> {
    DEFAULT_MASKER.mask(message)
}

/// Mask an optional message using the default threshold.
#[must_use]
pub fn mask_opt(message: Option<&str>) -> Option<Cow<'_, str>> {
    DEFAULT_MASKER.mask_opt(message)
}

/// Quick check for a run of at least [`MIN_CARD_DIGITS`] digits.
#[must_use]
pub fn has_enough_digits(message: &str) -> bool {
    DEFAULT_MASKER.has_enough_digits(message)
}

/// Quick check on an optional message; an absent message never matches.
#[must_use]
pub fn has_enough_digits_opt(message: Option<&str>) -> bool {
    message.is_some_and(has_enough_digits)
}
