//! Charset conversion contexts for line folding.
//!
//! Legacy-encoded text has to become Unicode scalar values before the
//! folding engine sees it, and folded lines usually have to go back out in
//! the encoding they came in. [`Decoder`] and [`Encoder`] are owned
//! conversion contexts over the WHATWG encodings: open one per direction,
//! convert through it, drop it. There is no process-wide converter state.
//!
//! Illegal input and unmappable output are governed by an [`ErrorPolicy`]:
//! `Strict` fails, `Ignore` drops, `Replace` (the default) substitutes —
//! U+FFFD on decode, and on encode a run of `?` matching the lost
//! character's cell width.

mod error;

use std::str::FromStr;

use encoding_rs::{DecoderResult, Encoding};
use unicode_width::UnicodeWidthChar;

pub use error::ConvertError;

/// What to do with illegal input bytes or unmappable output characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail on the first offending unit.
    Strict,
    /// Drop offending units and continue.
    Ignore,
    /// Substitute: U+FFFD on decode, width-matched `?` runs on encode.
    #[default]
    Replace,
}

impl FromStr for ErrorPolicy {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("strict") {
            Ok(Self::Strict)
        } else if s.eq_ignore_ascii_case("ignore") {
            Ok(Self::Ignore)
        } else if s.eq_ignore_ascii_case("replace") {
            Ok(Self::Replace)
        } else {
            Err(ConvertError::UnknownPolicy(s.to_owned()))
        }
    }
}

/// Conversion context turning legacy-encoded bytes into Unicode text.
#[derive(Debug)]
pub struct Decoder {
    encoding: &'static Encoding,
    policy: ErrorPolicy,
}

impl Decoder {
    /// Open a decoding context for a charset label ("Shift_JIS", "EUC-KR",
    /// "UTF-8", …).
    pub fn new(charset: &str, policy: ErrorPolicy) -> Result<Self, ConvertError> {
        let encoding = Encoding::for_label(charset.as_bytes())
            .ok_or_else(|| ConvertError::UnsupportedCharset(charset.to_owned()))?;
        Ok(Self { encoding, policy })
    }

    /// Canonical name of the charset this context converts from.
    pub fn charset(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode a complete byte buffer.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        let mut decoder = self.encoding.new_decoder();
        let mut out = String::with_capacity(bytes.len() + 16);
        let mut pos = 0;

        loop {
            let (result, read) =
                decoder.decode_to_string_without_replacement(&bytes[pos..], &mut out, true);
            pos += read;
            match result {
                DecoderResult::InputEmpty => return Ok(out),
                DecoderResult::OutputFull => {
                    out.reserve((bytes.len() - pos).max(16) + 16);
                }
                DecoderResult::Malformed(_, _) => match self.policy {
                    ErrorPolicy::Strict => {
                        return Err(ConvertError::IllegalSequence { offset: pos });
                    }
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(offset = pos, "replacing malformed input sequence");
                        out.push('\u{FFFD}');
                    }
                },
            }
        }
    }
}

/// Conversion context turning Unicode text back into legacy-encoded bytes.
#[derive(Debug)]
pub struct Encoder {
    encoding: &'static Encoding,
    policy: ErrorPolicy,
}

impl Encoder {
    /// Open an encoding context for a charset label.
    ///
    /// Per the WHATWG rules, UTF-16 labels encode as UTF-8; everything
    /// else round-trips.
    pub fn new(charset: &str, policy: ErrorPolicy) -> Result<Self, ConvertError> {
        let encoding = Encoding::for_label(charset.as_bytes())
            .ok_or_else(|| ConvertError::UnsupportedCharset(charset.to_owned()))?;
        Ok(Self {
            encoding: encoding.output_encoding(),
            policy,
        })
    }

    /// Canonical name of the charset this context converts to.
    pub fn charset(&self) -> &'static str {
        self.encoding.name()
    }

    /// Encode a complete string.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, ConvertError> {
        use encoding_rs::EncoderResult;

        let mut encoder = self.encoding.new_encoder();
        let mut out = Vec::with_capacity(text.len() + 16);
        let mut rest = text;

        loop {
            let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(
                rest, &mut out, true,
            );
            rest = &rest[read..];
            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::OutputFull => {
                    out.reserve(rest.len().max(16) + 16);
                }
                EncoderResult::Unmappable(c) => match self.policy {
                    ErrorPolicy::Strict => {
                        return Err(ConvertError::Unmappable {
                            c,
                            charset: self.charset(),
                        });
                    }
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => {
                        // Hold the column count steady: one '?' per cell
                        // the lost character would have occupied.
                        #[cfg(feature = "tracing")]
                        tracing::debug!(character = ?c, "substituting unmappable character");
                        let cells = c.width().unwrap_or(1).max(1);
                        out.extend(std::iter::repeat_n(b'?', cells));
                    }
                },
            }
        }
    }
}
