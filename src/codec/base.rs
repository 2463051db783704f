use std::fmt;
use std::str::FromStr;

use super::error::CodecError;

/// Conventional names for the numeral systems people ask for by name.
const NAMED_BASES: &[(&str, u32)] = &[
    ("unary", 1),
    ("binary", 2),
    ("ternary", 3),
    ("quaternary", 4),
    ("quinary", 5),
    ("senary", 6),
    ("septenary", 7),
    ("octal", 8),
    ("nonary", 9),
    ("decimal", 10),
    ("undecimal", 11),
    ("duodecimal", 12),
    ("tridecimal", 13),
    ("tetradecimal", 14),
    ("pentadecimal", 15),
    ("hexadecimal", 16),
    ("vigesimal", 20),
    ("hexatrigesimal", 36),
    ("sexagesimal", 60),
    ("base64", 64),
];

/// A validated radix in 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 64;

    pub const UNARY: Base = Base(1);
    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEXADECIMAL: Base = Base(16);

    /// Validates a radix. Values outside 1..=64 are rejected, never clamped.
    pub fn new(radix: u32) -> Result<Self, CodecError> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(CodecError::InvalidBase(radix))
        }
    }

    pub fn radix(self) -> u32 {
        self.0
    }

    pub fn is_unary(self) -> bool {
        self.0 == 1
    }

    /// Conventional name of this base, if it has one.
    pub fn name(self) -> Option<&'static str> {
        NAMED_BASES.iter().find(|(_, radix)| *radix == self.0).map(|(name, _)| *name)
    }

    /// Looks up a base by its conventional name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        NAMED_BASES.iter().find(|(n, _)| *n == lower).map(|(_, radix)| Self(*radix))
    }
}

impl TryFrom<u32> for Base {
    type Error = CodecError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl FromStr for Base {
    type Err = CodecError;

    /// Accepts either a decimal radix (`"16"`) or a name (`"hexadecimal"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(radix) => Self::new(radix),
                Err(_) => Err(CodecError::BaseTooLarge(trimmed.to_string())),
            };
        }

        Self::from_name(trimmed).ok_or_else(|| CodecError::UnknownBaseName(trimmed.to_string()))
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
