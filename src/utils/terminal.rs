//! Output sanitization for history records
//!
//! The string converter accepts any character in U+0000..=U+00FF, so history
//! records can carry ESC sequences and other control bytes. Anything printed
//! from a record goes through [`strip_ansi_codes`] first.

/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters,
/// keeping tab, newline and carriage return.
///
/// # Examples
///
/// ```
/// use base_converter::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mFF\x1b[0m"), "FF");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Sequence ends at the first letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitizes `text` and folds it onto one line for list rows.
pub fn single_line(text: &str) -> String {
    strip_ansi_codes(text)
        .chars()
        .map(|ch| if matches!(ch, '\t' | '\n' | '\r') { ' ' } else { ch })
        .collect()
}
