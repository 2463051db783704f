use thiserror::Error;

/// Errors raised by the base codec.
///
/// The codec never recovers from these itself; callers decide whether to
/// re-prompt, skip, or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Requested base is outside 1..=64.
    #[error("invalid base {0}: expected a value between 1 and 64")]
    InvalidBase(u32),

    /// Numeric base too large to be a radix at all, kept as typed.
    #[error("invalid base {0}: expected a value between 1 and 64")]
    BaseTooLarge(String),

    /// Base given by a name that is neither a number nor a known numeral system.
    #[error("unknown base '{0}': use a number from 1 to 64 or a name such as 'binary'")]
    UnknownBaseName(String),

    /// A digit has no value in the requested base.
    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit { digit: char, position: usize, base: u32 },

    /// A decoded group does not map to a supported character (0-255).
    #[error("value {0} is not a supported character code (expected 0-255)")]
    InvalidCodePoint(u64),

    /// The decoded value does not fit in 64 bits.
    #[error("value of '{0}' does not fit in 64 bits")]
    Overflow(String),

    /// Unary output would exceed the length cap.
    #[error(
        "value {0} is too large for unary output (at most {max} digits)",
        max = super::number::MAX_UNARY_LEN
    )]
    UnaryTooLong(u64),
}
