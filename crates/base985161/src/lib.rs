//! Binary-to-text codec over a contiguous block of 985,161 supplementary-plane
//! code points.
//!
//! Bytes are treated as one big base-256 integer and rewritten in base
//! 985,161; each digit of the result maps to the Unicode scalar value
//! `digit + U+10000`, so the alphabet occupies [U+10000, U+100848] and never
//! touches the surrogate range or ASCII. Leading zero bytes are preserved
//! exactly: each one becomes a leading zero-digit symbol, and the empty input
//! encodes to a single zero-digit symbol.
//!
//! ```rust
//! let text = base985161::encode(b"\x00\x2a");
//! assert_eq!(text, "\u{10000}\u{1002a}");
//! assert_eq!(base985161::decode(&text).unwrap(), b"\x00\x2a");
//! ```
//!
//! Both directions run in O(n²) time in the input length (repeated long
//! division over a shrinking digit array), which is fine for text-sized
//! payloads but is a documented scaling limit for very large buffers.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod alphabet;
mod decode;
mod encode;
mod error;
mod longdiv;

#[cfg(test)]
mod tests;

pub use alphabet::{BASE, CP_END, CP_START};
pub use decode::decode;
pub use encode::encode;
pub use error::DecodeError;
