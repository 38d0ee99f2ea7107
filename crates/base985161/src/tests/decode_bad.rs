use alloc::string::ToString;

use crate::{DecodeError, decode};

#[test]
fn rejects_ascii() {
    assert_eq!(
        decode("A"),
        Err(DecodeError::InvalidDigit {
            position: 0,
            scalar: 0x41,
        })
    );
}

#[test]
fn rejects_bmp_scalar_after_valid_symbol() {
    assert_eq!(
        decode("\u{10000}\u{ffff}"),
        Err(DecodeError::InvalidDigit {
            position: 1,
            scalar: 0xFFFF,
        })
    );
}

#[test]
fn rejects_first_scalar_past_alphabet_end() {
    assert_eq!(
        decode("\u{100849}"),
        Err(DecodeError::InvalidDigit {
            position: 0,
            scalar: 0x10_0849,
        })
    );
}

#[test]
fn accepts_last_alphabet_scalar() {
    // U+100848 is digit 985,160, the top of the alphabet.
    assert_eq!(decode("\u{100848}").unwrap(), [0x0F, 0x08, 0x48]);
}

#[test]
fn reports_first_offender_only() {
    // Validation fails on the first bad symbol even if later ones are worse.
    assert_eq!(
        decode("\u{10000}Z\u{ffff}"),
        Err(DecodeError::InvalidDigit {
            position: 1,
            scalar: 0x5A,
        })
    );
}

#[test]
fn error_display_uses_hex_scalar() {
    let err = decode("\u{10000}Z").unwrap_err();
    assert_eq!(err.to_string(), "invalid digit U+005A at symbol 1");
}
