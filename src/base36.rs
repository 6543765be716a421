use crate::error::Base36DecodeError;

/// Digits used for coordinate encoding.
const B36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes a coordinate as a base-36 string.
///
/// Zero encodes to `"0"`. Negative values encode as `-` followed by the
/// base-36 digits of the absolute value, most significant digit first.
pub fn encode(number: i32) -> String {
    if number == 0 {
        return String::from("0");
    }

    let mut encoded = String::new();
    // Widen before negating so that i32::MIN does not overflow.
    let mut number = i64::from(number);

    if number < 0 {
        encoded.push('-');
        number = -number;
    }

    let mut digits = Vec::new();

    while number != 0 {
        digits.push(B36_ALPHABET[(number % 36) as usize] as char);
        number /= 36;
    }

    for digit in digits.iter().rev() {
        encoded.push(*digit);
    }

    encoded
}

/// Decodes a base-36 coordinate string produced by [`encode`].
pub fn decode(encoded: &str) -> Result<i32, Base36DecodeError> {
    let (negative, digits) = match encoded.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, encoded),
    };

    if digits.is_empty() {
        return Err(Base36DecodeError::Empty);
    }

    let mut value: i64 = 0;

    for character in digits.chars() {
        let digit = match character {
            '0'..='9' => character as i64 - '0' as i64,
            'a'..='z' => character as i64 - 'a' as i64 + 10,
            _ => return Err(Base36DecodeError::InvalidDigit { character }),
        };

        value = value * 36 + digit;

        // Bail out early so long digit strings cannot overflow the
        // accumulator; the magnitude of i32::MIN is still accepted.
        if value > -(i64::from(i32::MIN)) {
            return Err(Base36DecodeError::OutOfRange);
        }
    }

    if negative {
        value = -value;
    }

    if value < i64::from(i32::MIN) || value > i64::from(i32::MAX) {
        return Err(Base36DecodeError::OutOfRange);
    }

    Ok(value as i32)
}
