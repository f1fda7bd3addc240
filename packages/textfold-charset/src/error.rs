//! Conversion errors.

/// Errors from charset conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The charset label names no supported encoding.
    #[error("unsupported character set {0:?}")]
    UnsupportedCharset(String),

    /// Illegal byte sequence in the input, under `ErrorPolicy::Strict`.
    #[error("illegal input sequence near byte offset {offset}")]
    IllegalSequence {
        /// Byte offset just past the offending sequence.
        offset: usize,
    },

    /// A character with no representation in the target charset, under
    /// `ErrorPolicy::Strict`.
    #[error("character {c:?} is not representable in {charset}")]
    Unmappable {
        /// The unmappable character.
        c: char,
        /// Canonical name of the target charset.
        charset: &'static str,
    },

    /// Unrecognized error policy name.
    #[error("unknown conversion policy {0:?} (expected strict, ignore or replace)")]
    UnknownPolicy(String),
}
