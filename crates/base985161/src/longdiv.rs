//! Long division over digit arrays, the shared radix-conversion primitive.
//!
//! The "big integer" in this crate is never a single scalar; it only ever
//! exists as a most-significant-first digit array in some radix, and each
//! conversion step divides that array by the target radix to peel off one
//! digit of the target representation. Per-step arithmetic stays in `u64`:
//! with both radices at most 985,161, `acc = rem * radix + digit` is below
//! 985,161² < 2⁴⁰.

use alloc::vec::Vec;

/// Divide the number represented by `digits` (most-significant-first, in
/// `radix`) by `divisor`.
///
/// Returns the quotient in the same radix with leading zero digits
/// suppressed, and the remainder in `[0, divisor)`. Suppression is what lets
/// the conversion loops terminate: a zero-valued dividend yields an empty
/// quotient.
pub(crate) fn div_rem(digits: &[u32], radix: u32, divisor: u32) -> (Vec<u32>, u32) {
    let mut quotient = Vec::with_capacity(digits.len());
    let mut rem: u64 = 0;
    for &d in digits {
        let acc = rem * u64::from(radix) + u64::from(d);
        let q = acc / u64::from(divisor);
        rem = acc % u64::from(divisor);
        if !quotient.is_empty() || q != 0 {
            // q < radix, so the narrowing is lossless.
            #[allow(clippy::cast_possible_truncation)]
            quotient.push(q as u32);
        }
    }
    // rem < divisor, so the narrowing is lossless.
    #[allow(clippy::cast_possible_truncation)]
    let rem = rem as u32;
    (quotient, rem)
}
