//! Mask string construction.
//!
//! A mask is the label `MASKED` centered in a run of `*` fill characters.
//! Masks shorter than [`MASK_CACHE_SIZE`] are built once per process and
//! shared read-only afterwards.

use std::borrow::Cow;
use std::sync::LazyLock;

/// Label placed in the middle of every mask.
pub const MASK_LABEL: &str = "MASKED";

/// Fill character padding the label on both sides.
pub const MASK_FILL: char = '*';

/// Number of mask lengths kept in the lookup table.
pub const MASK_CACHE_SIZE: usize = 20;

/// Lookup table for mask lengths `0..MASK_CACHE_SIZE`.
static MASK_LOOKUPS: LazyLock<[String; MASK_CACHE_SIZE]> =
    LazyLock::new(|| std::array::from_fn(build_mask));

/// Build a mask of the requested length.
///
/// The label is preceded by `floor(pads / 2)` fill characters and followed
/// by enough to reach `length`. When `length` is not larger than the label,
/// the label is returned on its own, so the result is never shorter than
/// [`MASK_LABEL`] even if that overshoots `length`.
#[must_use]
pub fn build_mask(length: usize) -> String {
    let Some(pads) = length
        .checked_sub(MASK_LABEL.len())
        .filter(|&pads| pads > 0)
    else {
        return MASK_LABEL.to_string();
    };

    let mut mask = String::with_capacity(length);
    mask.extend(std::iter::repeat_n(MASK_FILL, pads / 2));
    mask.push_str(MASK_LABEL);
    while mask.len() < length {
        mask.push(MASK_FILL);
    }
    mask
}

/// Get the precomputed mask for a short length.
#[must_use]
pub fn cached_mask(length: usize) -> Option<&'static str> {
    MASK_LOOKUPS.get(length).map(String::as_str)
}

/// Get a mask of the requested length, from the table when possible.
#[must_use]
pub fn mask_for_length(length: usize) -> Cow<'static, str> {
    match cached_mask(length) {
        Some(mask) => Cow::Borrowed(mask),
        None => Cow::Owned(build_mask(length)),
    }
}

/// Get a mask for `full`, sized to leave `unmasked` visible.
///
/// `unmasked` is the trailing part of `full` that stays in clear text, so the
/// mask covers `full.len() - unmasked.len()` bytes.
#[must_use]
pub fn mask_string(full: &str, unmasked: &str) -> Cow<'static, str> {
    mask_for_length(full.len().saturating_sub(unmasked.len()))
}
