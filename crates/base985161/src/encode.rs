use alloc::{string::String, vec::Vec};

use crate::{alphabet, longdiv::div_rem};

/// Encode arbitrary bytes as base-985,161 text.
///
/// Each leading `0x00` byte of the input becomes one leading zero-digit
/// symbol (U+10000); the rest of the input is converted as one base-256
/// integer into base-985,161 digits. The empty input encodes to a single
/// zero-digit symbol, the canonical representation of the value zero.
///
/// Pure and total: every byte value is a valid source digit, so there is no
/// error condition.
///
/// ```rust
/// assert_eq!(base985161::encode(&[]), "\u{10000}");
/// assert_eq!(base985161::encode(&[0x00, 0x01]), "\u{10000}\u{10001}");
/// ```
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Base-256 digits of the numeric value, most-significant-first, with the
    // zero-byte prefix already stripped so the first digit is non-zero.
    let mut digits: Vec<u32> = data[zeros..].iter().map(|&b| u32::from(b)).collect();

    // Repeated division extracts base-985,161 digits least-significant-first.
    let mut values: Vec<u32> = Vec::new();
    while !digits.is_empty() {
        let (quotient, rem) = div_rem(&digits, 256, alphabet::BASE);
        digits = quotient;
        values.push(rem);
    }
    if values.is_empty() {
        // All-zero (or empty) input: the value zero still gets its canonical
        // single-digit representation, distinct from the zero markers below.
        values.push(0);
    }

    // One zero digit per leading zero byte; these land in front once the
    // least-significant-first collection is reversed.
    values.resize(values.len() + zeros, 0);
    values.reverse();

    values.into_iter().map(alphabet::digit_to_char).collect()
}
