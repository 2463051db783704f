/// The 64 digit symbols, indexed by digit value.
pub const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Symbol used for every unit in base 1.
pub const UNARY_SYMBOL: char = '1';

/// Symbol for digit value 0, used for left padding.
pub const ZERO_SYMBOL: char = '0';

/// Returns the symbol for a digit value, or `None` if the value is 64 or more.
pub fn symbol_for(value: u32) -> Option<char> {
    ALPHABET.get(value as usize).map(|&b| b as char)
}

/// Returns the digit value of a symbol, or `None` if it is not in the alphabet.
pub fn value_of(symbol: char) -> Option<u32> {
    let value = match symbol {
        '0'..='9' => symbol as u32 - '0' as u32,
        'A'..='Z' => symbol as u32 - 'A' as u32 + 10,
        'a'..='z' => symbol as u32 - 'a' as u32 + 36,
        '+' => 62,
        '/' => 63,
        _ => return None,
    };
    Some(value)
}
