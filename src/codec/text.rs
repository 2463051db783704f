//! Per-character text encoding.
//!
//! Text mode works on single-byte character values (U+0000..=U+00FF). Each
//! character becomes one group of digits, left-padded with `'0'` to the
//! smallest width that can hold any byte in the chosen base. Groups are
//! joined with single spaces, so they can be split back on whitespace.
//!
//! Base 1 groups are not padded. A NUL character encodes to an empty group in
//! base 1, which does not survive whitespace splitting.

use super::alphabet::ZERO_SYMBOL;
use super::base::Base;
use super::error::CodecError;
use super::number::{decode, encode};

/// Largest character value accepted in text mode.
pub const MAX_CODE_POINT: u32 = 0xFF;

/// Number of digits needed to represent any byte value (0-255) in `base`.
///
/// This is `ceil(log(256) / log(base))`, computed with integers. Returns
/// `None` for base 1, where padding does not apply.
pub fn group_width(base: Base) -> Option<usize> {
    if base.is_unary() {
        return None;
    }

    let radix = u64::from(base.radix());
    let mut width = 1;
    let mut capacity = radix;
    while capacity < 256 {
        capacity *= radix;
        width += 1;
    }
    Some(width)
}

/// Encodes every character of `text` as a fixed-width digit group.
///
/// # Errors
///
/// - [`CodecError::InvalidBase`] if `base` is outside 1..=64
/// - [`CodecError::InvalidCodePoint`] if a character is above U+00FF
///
/// # Examples
///
/// ```
/// use base_converter::codec::{join_groups, text_to_base_groups};
///
/// let groups = text_to_base_groups("Hi", 16)?;
/// assert_eq!(join_groups(&groups), "48 69");
/// # Ok::<(), base_converter::codec::CodecError>(())
/// ```
pub fn text_to_base_groups(text: &str, base: u32) -> Result<Vec<String>, CodecError> {
    let base = Base::new(base)?;
    let width = group_width(base);

    text.chars()
        .map(|ch| {
            let code = u32::from(ch);
            if code > MAX_CODE_POINT {
                return Err(CodecError::InvalidCodePoint(u64::from(code)));
            }

            let digits = encode(u64::from(code), base.radix())?;
            Ok(match width {
                Some(width) => pad_left(&digits, width),
                None => digits,
            })
        })
        .collect()
}

/// Decodes each group into a character, keeping failures per group.
///
/// Callers that want to skip bad groups can filter the results; callers that
/// want all-or-nothing should use [`base_groups_to_text`].
pub fn decode_groups<S: AsRef<str>>(groups: &[S], base: u32) -> Vec<Result<char, CodecError>> {
    groups.iter().map(|group| decode_group(group.as_ref(), base)).collect()
}

/// Decodes digit groups back into text, failing on the first bad group.
///
/// # Errors
///
/// - [`CodecError::InvalidBase`] if `base` is outside 1..=64
/// - [`CodecError::InvalidDigit`] if a group has a digit invalid for `base`
/// - [`CodecError::InvalidCodePoint`] if a group decodes above 255
pub fn base_groups_to_text<S: AsRef<str>>(groups: &[S], base: u32) -> Result<String, CodecError> {
    Base::new(base)?;
    groups.iter().map(|group| decode_group(group.as_ref(), base)).collect()
}

/// Joins groups with single spaces.
pub fn join_groups<S: AsRef<str>>(groups: &[S]) -> String {
    groups.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Splits a group string on any run of whitespace.
pub fn split_groups(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

fn decode_group(group: &str, base: u32) -> Result<char, CodecError> {
    let value = decode(group, base)?;
    u8::try_from(value).map(char::from).map_err(|_| CodecError::InvalidCodePoint(value))
}

fn pad_left(digits: &str, width: usize) -> String {
    let padding = width.saturating_sub(digits.len());
    let mut padded = String::with_capacity(width.max(digits.len()));
    padded.extend(std::iter::repeat_n(ZERO_SYMBOL, padding));
    padded.push_str(digits);
    padded
}
