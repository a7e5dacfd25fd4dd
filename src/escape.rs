//! MARC-8 escape sequence parsing.
//!
//! MARC-8 switches character sets with ISO 2022 style escape sequences. Two
//! techniques are in use:
//!
//! - **Single-byte (locking, non-ISO)**: `ESC g`, `ESC b`, `ESC p`, `ESC s`
//!   select Greek symbols, subscripts, superscripts or ASCII into G0.
//! - **Multi-byte (ISO 2022 designation)**: `ESC I F` where `I` is one or two
//!   intermediate bytes naming the target register and `F` is the final byte
//!   naming the character set.
//!
//! | Intermediate | Register | Set size |
//! |---|---|---|
//! | `(` or `,` | G0 | single-byte |
//! | `)` or `-` | G1 | single-byte |
//! | `$` or `$ ,` | G0 | multibyte |
//! | `$ )` or `$ -` | G1 | multibyte |
//!
//! ANSEL is designated with the two-byte final `!E`.

use crate::charset::CharacterSetId;
use crate::registry::CharacterSetRegistry;
use crate::state::{Register, WorkingSetState};

/// The escape byte.
pub const ESC: u8 = 0x1B;

/// Bytes skipped, counting the ESC, when the selector is not recognized.
const UNRECOGNIZED_SKIP: usize = 3;

/// A parsed escape sequence.
///
/// Every variant carries `len`, the number of bytes the sequence occupies
/// starting at the ESC byte. `len` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSequence {
    /// Assign a character set to a register.
    Designate {
        /// Target register
        register: Register,
        /// Set to assign
        charset: CharacterSetId,
        /// Sequence length
        len: usize,
    },
    /// A well-formed designation whose final byte names no known set.
    UnknownCharset {
        /// Register the sequence addressed
        register: Register,
        /// The unresolved final byte
        identifier: u8,
        /// Sequence length
        len: usize,
    },
    /// The input ended before the sequence was complete.
    Truncated {
        /// Bytes remaining from the ESC to the end of input
        len: usize,
    },
    /// The bytes after ESC match neither technique.
    Unrecognized {
        /// Bytes skipped
        len: usize,
    },
}

impl EscapeSequence {
    /// Parse the escape sequence starting at `cursor`.
    ///
    /// `bytes[cursor]` is expected to be [`ESC`]. The returned length never
    /// runs past the end of `bytes`.
    #[must_use]
    pub fn parse(bytes: &[u8], cursor: usize) -> Self {
        debug_assert_eq!(bytes.get(cursor), Some(&ESC));
        let remaining = bytes.len().saturating_sub(cursor);
        let at = |offset: usize| bytes.get(cursor + offset).copied();

        let Some(selector) = at(1) else {
            return EscapeSequence::Truncated { len: remaining.max(1) };
        };

        let single = match selector {
            0x67 => Some(CharacterSetId::GreekSymbols),
            0x62 => Some(CharacterSetId::Subscript),
            0x70 => Some(CharacterSetId::Superscript),
            0x73 => Some(CharacterSetId::BasicLatin),
            _ => None,
        };
        if let Some(charset) = single {
            return EscapeSequence::Designate {
                register: Register::G0,
                charset,
                len: 2,
            };
        }

        let (register, intermediates) = match selector {
            0x28 | 0x2C => (Register::G0, 1),
            0x29 | 0x2D => (Register::G1, 1),
            0x24 => match at(2) {
                None => return EscapeSequence::Truncated { len: remaining },
                Some(0x2C) => (Register::G0, 2),
                Some(0x29 | 0x2D) => (Register::G1, 2),
                Some(_) => (Register::G0, 1),
            },
            _ => {
                return EscapeSequence::Unrecognized {
                    len: UNRECOGNIZED_SKIP.min(remaining),
                }
            },
        };

        let mut final_offset = 1 + intermediates;
        let Some(mut identifier) = at(final_offset) else {
            return EscapeSequence::Truncated { len: remaining };
        };
        if identifier == b'!' {
            // `!E` (ANSEL) is the only two-byte final
            final_offset += 1;
            match at(final_offset) {
                Some(b'E') => identifier = b'E',
                Some(next) => {
                    return EscapeSequence::UnknownCharset {
                        register,
                        identifier: next,
                        len: final_offset + 1,
                    }
                },
                None => return EscapeSequence::Truncated { len: remaining },
            }
        }

        let len = final_offset + 1;
        match CharacterSetId::from_byte(identifier) {
            Some(charset) => EscapeSequence::Designate {
                register,
                charset,
                len,
            },
            None => EscapeSequence::UnknownCharset {
                register,
                identifier,
                len,
            },
        }
    }

    /// Number of bytes occupied by the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        match *self {
            EscapeSequence::Designate { len, .. }
            | EscapeSequence::UnknownCharset { len, .. }
            | EscapeSequence::Truncated { len }
            | EscapeSequence::Unrecognized { len } => len,
        }
    }

    /// Always false; a parsed sequence covers at least the ESC byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply the register mutation, if any. Returns whether a register changed.
    pub fn apply(&self, state: &mut WorkingSetState, registry: &CharacterSetRegistry) -> bool {
        match *self {
            EscapeSequence::Designate {
                register, charset, ..
            } => {
                state.designate(register, registry.get(charset));
                true
            },
            _ => false,
        }
    }
}
