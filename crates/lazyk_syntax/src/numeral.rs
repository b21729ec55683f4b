//! Numeral literal decoding, shared by the lexer (validation) and the
//! parser (values).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralError {
    Empty,
    BadDigit(char),
    Overflow,
}

/// Decode the text of a numeral token: `[123]`, `[$7f]` or `123`.
pub fn parse_numeral(text: &str) -> Result<u32, NumeralError> {
    let body = match text.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']').unwrap_or(rest),
        None => text,
    };
    let (radix, digits) = match body.strip_prefix('$') {
        Some(hex) => (16, hex),
        None => (10, body),
    };
    if digits.is_empty() {
        return Err(NumeralError::Empty);
    }
    let mut value: u32 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(radix).ok_or(NumeralError::BadDigit(ch))?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(NumeralError::Overflow)?;
    }
    Ok(value)
}
