use thiserror::Error;

/// Error returned by [`decode`](crate::decode) for text that is not valid
/// base-985,161.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A scalar value in the input lies outside the alphabet block.
    #[error("invalid digit U+{scalar:04X} at symbol {position}")]
    InvalidDigit {
        /// Zero-based index of the offending symbol in the input text,
        /// counted in scalar values.
        position: usize,
        /// The offending Unicode scalar value.
        scalar: u32,
    },
}
