use alloc::{vec, vec::Vec};

use crate::{alphabet, error::DecodeError, longdiv::div_rem};

/// Decode base-985,161 text back to the original bytes.
///
/// The inverse of [`encode`](crate::encode): leading zero-digit symbols are
/// restored as leading `0x00` bytes, and the remaining digits are converted
/// back from base 985,161 to base 256. Empty text decodes to the empty
/// buffer, and the single zero-digit symbol (the encoding of the empty
/// buffer) decodes back to it.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidDigit`] for the first scalar value outside
/// the alphabet block [U+10000, U+100848], with no partial output. Rust
/// strings cannot hold unpaired surrogates, so a malformed-text case beyond
/// that cannot reach this function.
///
/// ```rust
/// assert_eq!(base985161::decode("\u{10000}\u{10001}").unwrap(), [0x00, 0x01]);
/// assert!(base985161::decode("A").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut values: Vec<u32> = Vec::new();
    for (position, ch) in text.chars().enumerate() {
        let value = alphabet::char_to_digit(ch).ok_or(DecodeError::InvalidDigit {
            position,
            scalar: u32::from(ch),
        })?;
        values.push(value);
    }

    let zeros = values.iter().take_while(|&&v| v == 0).count();
    if zeros == values.len() {
        // All digits zero: the last one is the canonical representation of
        // the value zero, the ones before it are leading-zero markers. This
        // also covers empty text (zero symbols, zero bytes).
        return Ok(vec![0u8; zeros.saturating_sub(1)]);
    }

    // The non-zero remainder of the digit sequence, converted down to bytes
    // least-significant-first.
    let mut digits = values[zeros..].to_vec();
    let mut bytes: Vec<u8> = Vec::new();
    while !digits.is_empty() {
        let (quotient, rem) = div_rem(&digits, alphabet::BASE, 256);
        digits = quotient;
        // rem < 256 by the division contract.
        #[allow(clippy::cast_possible_truncation)]
        bytes.push(rem as u8);
    }
    bytes.resize(bytes.len() + zeros, 0);
    bytes.reverse();
    Ok(bytes)
}
