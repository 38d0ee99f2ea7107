//! Alphabet constants and the digit ⇄ scalar-value bijection.

/// Number of distinct symbols in the alphabet (the target radix).
pub const BASE: u32 = 985_161;

/// First code point of the contiguous alphabet block.
pub const CP_START: u32 = 0x10000;

/// Last code point of the contiguous alphabet block (U+100848).
pub const CP_END: u32 = CP_START + BASE - 1;

// The block must sit above the surrogate range and below the scalar ceiling.
const _: () = assert!(CP_START > 0xDFFF);
const _: () = assert!(CP_END <= 0x10FFFF);

/// Map a digit value in `[0, BASE)` to its symbol.
///
/// Out-of-range values are a caller bug: encoding only ever produces digits
/// reduced modulo [`BASE`].
pub(crate) fn digit_to_char(value: u32) -> char {
    debug_assert!(value < BASE, "digit {value} out of range");
    // Always a valid scalar per the compile-time range asserts above.
    char::from_u32(CP_START + value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Map a symbol back to its digit value, or `None` if the scalar value lies
/// outside the alphabet block.
pub(crate) fn char_to_digit(ch: char) -> Option<u32> {
    let cp = u32::from(ch);
    if (CP_START..=CP_END).contains(&cp) {
        Some(cp - CP_START)
    } else {
        None
    }
}
