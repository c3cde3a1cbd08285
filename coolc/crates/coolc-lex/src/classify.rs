//! Byte classification predicates and the integer literal validator.

/// Returns true if the byte is Cool whitespace.
///
/// The whitespace set is space, newline, form feed, carriage return, tab
/// and vertical tab.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\x0c' | b'\r' | b'\t' | b'\x0b')
}

/// Returns true if the byte can appear in a name (identifier, type name,
/// keyword or integer literal): ASCII alphanumeric or underscore.
#[inline]
pub fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Returns true if the text is a valid positive 32-bit signed integer
/// literal.
///
/// A candidate is accepted iff it is at most 10 digits, all digits, its
/// first digit is at most `2` when exactly 10 digits long, and the parsed
/// value does not exceed `i32::MAX`. The length and leading-digit checks
/// guarantee the value fits in a `u32` before it is parsed.
pub fn is_integer_literal(text: &str) -> bool {
    let bytes = text.as_bytes();

    if bytes.len() > 10 {
        return false;
    }

    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if bytes.len() == 10 && bytes[0] > b'2' {
        return false;
    }

    text.parse::<u32>().is_ok_and(|value| value <= i32::MAX as u32)
}
