//! Error types for MARC-8 operations.
//!
//! This module provides the [`MarcError`] type for the fallible parts of the
//! library and the [`Result`] convenience type. Decoding a MARC-8 byte string
//! never fails; errors only arise while building character set tables or when
//! a caller asks for UTF-8 data that turns out to be invalid.

use thiserror::Error;

/// Error type for all MARC-8 library operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarcError {
    /// The byte is not a known MARC-8 character set identifier.
    #[error("Unknown character set identifier: 0x{0:02X}")]
    UnknownCharset(u8),

    /// Table data could not be turned into a character set.
    #[error("Invalid character set table: {0}")]
    InvalidTable(String),

    /// Error related to character encoding conversion.
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
