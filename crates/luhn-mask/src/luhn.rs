//! Luhn checksum and separator handling.

use std::borrow::Cow;

use crate::error::{MaskError, Result};

/// Check whether a byte is a separator allowed inside a card number.
#[must_use]
pub const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'-')
}

/// Validate a digit string using the Luhn algorithm.
///
/// The input must contain ASCII digits only; strip separators first with
/// [`strip_separators`].
///
/// # Panics
///
/// Panics if `number` contains anything other than ASCII digits. Use
/// [`checked_luhn`] when the input is not known to be clean.
#[must_use]
pub fn luhn_check(number: &str) -> bool {
    match checked_luhn(number) {
        Ok(valid) => valid,
        Err(e) => panic!("luhn_check called on unstripped input: {e}"),
    }
}

/// Validate a digit string using the Luhn algorithm, reporting non-digits.
///
/// Digits are processed right to left, doubling every second one. A doubled
/// value above nine has nine subtracted. The number passes when the sum is
/// a multiple of ten.
pub fn checked_luhn(number: &str) -> Result<bool> {
    let mut sum: u32 = 0;
    let mut doubled = false;

    for (pos, c) in number.char_indices().rev() {
        let Some(digit) = c.to_digit(10) else {
            return Err(MaskError::non_digit(pos, c, number));
        };

        let addend = if doubled {
            let d = digit * 2;
            if d > 9 { d - 9 } else { d }
        } else {
            digit
        };
        sum += addend;
        doubled = !doubled;
    }

    Ok(sum % 10 == 0)
}

/// Remove any space and hyphen characters from the given string.
///
/// Returns the input unchanged (borrowed) when it has no separators.
#[must_use]
pub fn strip_separators(number: &str) -> Cow<'_, str> {
    if !number.bytes().any(is_separator) {
        return Cow::Borrowed(number);
    }

    Cow::Owned(number.chars().filter(|&c| c != ' ' && c != '-').collect())
}
