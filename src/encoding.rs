//! Leader-driven character encoding dispatch.
//!
//! MARC records can use different character encodings:
//! - **MARC-8** (legacy): Mixed character sets with escape sequences (ISO 2022)
//! - **UTF-8** (modern): Unicode standard encoding
//!
//! The encoding is indicated in position 9 of the MARC leader:
//! - Space character = MARC-8
//! - 'a' = UTF-8
//!
//! The record container owns the leader and the raw subfield bytes; this
//! module turns those bytes into text according to the declared encoding.

use memchr::memchr;

use crate::decoder::decode_marc8;
use crate::error::{MarcError, Result};
use crate::escape::ESC;

/// Character encoding for MARC records.
///
/// Indicates the character set used to encode field data in a MARC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarcEncoding {
    /// MARC-8 encoding (legacy, mixed character sets)
    Marc8,
    /// UTF-8 encoding (modern standard)
    Utf8,
}

impl MarcEncoding {
    /// Detect encoding from leader character coding field
    /// Position 9 of leader indicates the character coding:
    /// ' ' (space) = MARC-8
    /// 'a' = UTF-8
    ///
    /// # Errors
    ///
    /// Returns `MarcError::EncodingError` if the character is not a valid encoding indicator.
    pub fn from_leader_char(c: char) -> Result<Self> {
        match c {
            ' ' => Ok(MarcEncoding::Marc8),
            'a' => Ok(MarcEncoding::Utf8),
            _ => Err(MarcError::EncodingError(format!(
                "Unknown character encoding: {c}"
            ))),
        }
    }

    /// Get the leader character for this encoding
    #[must_use]
    pub fn as_leader_char(&self) -> char {
        match self {
            MarcEncoding::Marc8 => ' ',
            MarcEncoding::Utf8 => 'a',
        }
    }

    /// Guess the encoding of raw field data.
    ///
    /// Escape sequences mean MARC-8; valid UTF-8 with multibyte sequences
    /// means UTF-8; other high bytes mean MARC-8. Pure ASCII is valid in both
    /// and yields `None`.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if memchr(ESC, bytes).is_some() {
            return Some(MarcEncoding::Marc8);
        }
        if bytes.is_ascii() {
            return None;
        }
        if std::str::from_utf8(bytes).is_ok() {
            Some(MarcEncoding::Utf8)
        } else {
            Some(MarcEncoding::Marc8)
        }
    }
}

/// Decode bytes using the specified encoding
///
/// # Errors
///
/// Returns `MarcError::EncodingError` if the encoding is UTF-8 and the bytes
/// are not valid UTF-8. MARC-8 decoding never fails.
pub fn decode_bytes(bytes: &[u8], encoding: MarcEncoding) -> Result<String> {
    match encoding {
        MarcEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| MarcError::EncodingError(format!("Invalid UTF-8: {e}"))),
        MarcEncoding::Marc8 => Ok(decode_marc8(bytes)),
    }
}
