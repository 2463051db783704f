use super::alphabet::{ALPHABET, UNARY_SYMBOL, value_of};
use super::base::Base;
use super::error::CodecError;

/// Longest unary string [`encode`] will build (one digit per unit).
pub const MAX_UNARY_LEN: u64 = 1 << 20;

/// Encodes a non-negative integer as a digit string in `base` (1..=64).
///
/// Base 1 is unary: `value` copies of `'1'`, so zero encodes to the empty
/// string. For every other base zero encodes to `"0"`.
///
/// # Errors
///
/// - [`CodecError::InvalidBase`] if `base` is outside 1..=64
/// - [`CodecError::UnaryTooLong`] if `base` is 1 and `value` exceeds [`MAX_UNARY_LEN`]
///
/// # Examples
///
/// ```
/// use base_converter::codec::encode;
///
/// assert_eq!(encode(10, 2)?, "1010");
/// assert_eq!(encode(255, 16)?, "FF");
/// # Ok::<(), base_converter::codec::CodecError>(())
/// ```
pub fn encode(value: u64, base: u32) -> Result<String, CodecError> {
    let base = Base::new(base)?;

    if base.is_unary() {
        let len = Some(value)
            .filter(|v| *v <= MAX_UNARY_LEN)
            .and_then(|v| usize::try_from(v).ok())
            .ok_or(CodecError::UnaryTooLong(value))?;
        return Ok(std::iter::repeat_n(UNARY_SYMBOL, len).collect());
    }

    if value == 0 {
        return Ok("0".to_string());
    }

    let radix = u64::from(base.radix());
    // 64 binary digits is the longest possible output
    let mut digits = Vec::with_capacity(64);
    let mut remaining = value;
    while remaining > 0 {
        digits.push(ALPHABET[(remaining % radix) as usize]);
        remaining /= radix;
    }
    digits.reverse();

    // Every byte comes from ALPHABET, which is ASCII
    Ok(digits.into_iter().map(char::from).collect())
}

/// Decodes a digit string in `base` (1..=64) back to an integer.
///
/// The empty string decodes to 0. In base 1 the result is the number of
/// characters; their identity is not checked. Symbols are case-sensitive:
/// `'a'` is 36 and `'A'` is 10.
///
/// # Errors
///
/// - [`CodecError::InvalidBase`] if `base` is outside 1..=64
/// - [`CodecError::InvalidDigit`] if a symbol has no value below `base`
/// - [`CodecError::Overflow`] if the result does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use base_converter::codec::decode;
///
/// assert_eq!(decode("FF", 16)?, 255);
/// assert_eq!(decode("1010", 2)?, 10);
/// # Ok::<(), base_converter::codec::CodecError>(())
/// ```
pub fn decode(digits: &str, base: u32) -> Result<u64, CodecError> {
    let base = Base::new(base)?;

    if base.is_unary() {
        return Ok(digits.chars().count() as u64);
    }

    let radix = base.radix();
    let mut acc: u64 = 0;
    for (position, digit) in digits.chars().enumerate() {
        let value = value_of(digit)
            .filter(|v| *v < radix)
            .ok_or(CodecError::InvalidDigit { digit, position, base: radix })?;

        acc = acc
            .checked_mul(u64::from(radix))
            .and_then(|a| a.checked_add(u64::from(value)))
            .ok_or_else(|| CodecError::Overflow(digits.to_string()))?;
    }

    Ok(acc)
}

/// Re-expresses a digit string from one base in another.
pub fn convert(digits: &str, from: u32, to: u32) -> Result<String, CodecError> {
    // Reject a bad target before touching the digits
    Base::new(to)?;
    let value = decode(digits, from)?;
    encode(value, to)
}
