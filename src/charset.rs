//! MARC-8 character set identifiers, code mappings and lookup tables.
//!
//! MARC-8 is assembled from a family of graphic character sets. Each set is
//! identified by the final byte of the escape sequence that designates it
//! (`B` for Basic Latin, `1` for the East Asian set, and so on) and maps
//! one-byte or three-byte codes to Unicode scalar values.
//!
//! A [`CharacterSet`] is plain data: it is built once, never mutated, and is
//! shared by reference between any number of decoders.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{MarcError, Result};

/// Identifier of a MARC-8 character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterSetId {
    /// Basic Latin (ASCII), final byte `B`
    BasicLatin,
    /// ANSEL extended Latin, final byte `E` (designated as `!E`)
    AnselExtendedLatin,
    /// C0 controls plus the MARC-specific C1 controls (not designatable)
    Controls,
    /// Subscript digits and signs, selected with `ESC b`
    Subscript,
    /// Superscript digits and signs, selected with `ESC p`
    Superscript,
    /// Greek symbols (alpha, beta, gamma), selected with `ESC g`
    GreekSymbols,
    /// Basic Hebrew, final byte `2`
    BasicHebrew,
    /// Basic Cyrillic, final byte `N`
    BasicCyrillic,
    /// Extended Cyrillic, final byte `Q`
    ExtendedCyrillic,
    /// Basic Arabic, final byte `3`
    BasicArabic,
    /// Extended Arabic, final byte `4`
    ExtendedArabic,
    /// Basic Greek, final byte `S`
    BasicGreek,
    /// East Asian Character Code (CJK), final byte `1`, three bytes per character
    EACC,
}

impl CharacterSetId {
    /// Every character set the library knows about.
    pub const ALL: [CharacterSetId; 13] = [
        CharacterSetId::BasicLatin,
        CharacterSetId::AnselExtendedLatin,
        CharacterSetId::Controls,
        CharacterSetId::Subscript,
        CharacterSetId::Superscript,
        CharacterSetId::GreekSymbols,
        CharacterSetId::BasicHebrew,
        CharacterSetId::BasicCyrillic,
        CharacterSetId::ExtendedCyrillic,
        CharacterSetId::BasicArabic,
        CharacterSetId::ExtendedArabic,
        CharacterSetId::BasicGreek,
        CharacterSetId::EACC,
    ];

    /// Resolve the final byte of a designation escape sequence.
    ///
    /// Returns `None` for bytes that do not name a MARC-8 set. The control
    /// set cannot be designated and therefore has no final byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'B' => Some(CharacterSetId::BasicLatin),
            b'E' => Some(CharacterSetId::AnselExtendedLatin),
            b'b' => Some(CharacterSetId::Subscript),
            b'p' => Some(CharacterSetId::Superscript),
            b'g' => Some(CharacterSetId::GreekSymbols),
            b'2' => Some(CharacterSetId::BasicHebrew),
            b'N' => Some(CharacterSetId::BasicCyrillic),
            b'Q' => Some(CharacterSetId::ExtendedCyrillic),
            b'3' => Some(CharacterSetId::BasicArabic),
            b'4' => Some(CharacterSetId::ExtendedArabic),
            b'S' => Some(CharacterSetId::BasicGreek),
            b'1' => Some(CharacterSetId::EACC),
            _ => None,
        }
    }

    /// The identifying byte of this set.
    ///
    /// For designatable sets this is the escape sequence final byte. The
    /// control set uses `C`, which never appears in an escape sequence.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            CharacterSetId::BasicLatin => b'B',
            CharacterSetId::AnselExtendedLatin => b'E',
            CharacterSetId::Controls => b'C',
            CharacterSetId::Subscript => b'b',
            CharacterSetId::Superscript => b'p',
            CharacterSetId::GreekSymbols => b'g',
            CharacterSetId::BasicHebrew => b'2',
            CharacterSetId::BasicCyrillic => b'N',
            CharacterSetId::ExtendedCyrillic => b'Q',
            CharacterSetId::BasicArabic => b'3',
            CharacterSetId::ExtendedArabic => b'4',
            CharacterSetId::BasicGreek => b'S',
            CharacterSetId::EACC => b'1',
        }
    }

    /// Human-readable name of the set.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CharacterSetId::BasicLatin => "Basic Latin (ASCII)",
            CharacterSetId::AnselExtendedLatin => "Extended Latin (ANSEL)",
            CharacterSetId::Controls => "Controls",
            CharacterSetId::Subscript => "Subscripts",
            CharacterSetId::Superscript => "Superscripts",
            CharacterSetId::GreekSymbols => "Greek Symbols",
            CharacterSetId::BasicHebrew => "Basic Hebrew",
            CharacterSetId::BasicCyrillic => "Basic Cyrillic",
            CharacterSetId::ExtendedCyrillic => "Extended Cyrillic",
            CharacterSetId::BasicArabic => "Basic Arabic",
            CharacterSetId::ExtendedArabic => "Extended Arabic",
            CharacterSetId::BasicGreek => "Basic Greek",
            CharacterSetId::EACC => "East Asian (EACC)",
        }
    }

    /// Number of bytes per character: 3 for EACC, 1 for everything else.
    #[must_use]
    pub const fn byte_width(self) -> usize {
        match self {
            CharacterSetId::EACC => 3,
            _ => 1,
        }
    }

    /// Whether the set is small enough to be loaded eagerly.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        matches!(
            self,
            CharacterSetId::BasicLatin
                | CharacterSetId::AnselExtendedLatin
                | CharacterSetId::Controls
                | CharacterSetId::Subscript
                | CharacterSetId::Superscript
                | CharacterSetId::GreekSymbols
        )
    }
}

impl TryFrom<u8> for CharacterSetId {
    type Error = MarcError;

    fn try_from(byte: u8) -> Result<Self> {
        CharacterSetId::from_byte(byte).ok_or(MarcError::UnknownCharset(byte))
    }
}

impl fmt::Display for CharacterSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static table row: MARC code, Unicode character, display name, combining flag.
pub(crate) type Row = (u32, char, &'static str, bool);

/// A single MARC-8 to Unicode mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeMapping {
    charset: CharacterSetId,
    marc: u32,
    unicode: char,
    name: Cow<'static, str>,
    combining: bool,
}

impl CodeMapping {
    fn from_row(charset: CharacterSetId, row: &Row) -> Self {
        let (marc, unicode, name, combining) = *row;
        CodeMapping {
            charset,
            marc,
            unicode,
            name: Cow::Borrowed(name),
            combining,
        }
    }

    /// Build a mapping from the textual table format.
    ///
    /// `marc_hex` must hold two hex digits for one-byte sets and six for the
    /// EACC set; `unicode_hex` must name a Unicode scalar value.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::InvalidTable` if either hex string is malformed or
    /// has the wrong width for the character set.
    pub fn from_hex(
        charset: CharacterSetId,
        marc_hex: &str,
        unicode_hex: &str,
        name: impl Into<String>,
        combining: bool,
    ) -> Result<Self> {
        let expected_digits = charset.byte_width() * 2;
        if marc_hex.len() != expected_digits {
            return Err(MarcError::InvalidTable(format!(
                "{charset}: MARC code '{marc_hex}' must have {expected_digits} hex digits"
            )));
        }
        let marc = u32::from_str_radix(marc_hex, 16).map_err(|e| {
            MarcError::InvalidTable(format!("{charset}: bad MARC code '{marc_hex}': {e}"))
        })?;
        let scalar = u32::from_str_radix(unicode_hex, 16).map_err(|e| {
            MarcError::InvalidTable(format!("{charset}: bad code point '{unicode_hex}': {e}"))
        })?;
        let unicode = char::from_u32(scalar).ok_or_else(|| {
            MarcError::InvalidTable(format!(
                "{charset}: U+{scalar:04X} is not a Unicode scalar value"
            ))
        })?;

        Ok(CodeMapping {
            charset,
            marc,
            unicode,
            name: Cow::Owned(name.into()),
            combining,
        })
    }

    /// The set this mapping belongs to.
    #[must_use]
    pub fn charset(&self) -> CharacterSetId {
        self.charset
    }

    /// Identifying byte of the owning set.
    #[must_use]
    pub fn charset_code(&self) -> u8 {
        self.charset.code()
    }

    /// MARC code as a big-endian integer (`0x41`, `0x213021`, ...).
    #[must_use]
    pub fn marc(&self) -> u32 {
        self.marc
    }

    /// MARC code as the byte sequence that appears in a record.
    #[must_use]
    pub fn marc_bytes(&self) -> SmallVec<[u8; 3]> {
        let width = self.charset.byte_width();
        self.marc.to_be_bytes()[4 - width..].iter().copied().collect()
    }

    /// MARC code as upper-case hex, two digits per byte.
    #[must_use]
    pub fn marc_hex(&self) -> String {
        let width = self.charset.byte_width() * 2;
        format!("{:0width$X}", self.marc)
    }

    /// The Unicode character this code decodes to.
    #[must_use]
    pub fn unicode(&self) -> char {
        self.unicode
    }

    /// The Unicode code point as upper-case hex, at least four digits.
    #[must_use]
    pub fn unicode_hex(&self) -> String {
        format!("{:04X}", u32::from(self.unicode))
    }

    /// Display name of the character.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a combining mark.
    #[must_use]
    pub fn is_combining(&self) -> bool {
        self.combining
    }
}

/// An immutable MARC-8 character set table.
#[derive(Debug, Clone)]
pub struct CharacterSet {
    id: CharacterSetId,
    mappings: IndexMap<u32, CodeMapping>,
}

impl CharacterSet {
    /// Build a set from built-in table rows.
    pub(crate) fn from_rows(id: CharacterSetId, rows: &[Row]) -> Self {
        let mappings = rows
            .iter()
            .map(|row| (row.0, CodeMapping::from_row(id, row)))
            .collect();
        CharacterSet { id, mappings }
    }

    /// Build a set from externally supplied mappings.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::InvalidTable` if a mapping belongs to another set
    /// or if two mappings share the same MARC code.
    pub fn from_mappings(
        id: CharacterSetId,
        mappings: impl IntoIterator<Item = CodeMapping>,
    ) -> Result<Self> {
        let mut table = IndexMap::new();
        for mapping in mappings {
            if mapping.charset != id {
                return Err(MarcError::InvalidTable(format!(
                    "{id}: mapping {} belongs to {}",
                    mapping.marc_hex(),
                    mapping.charset
                )));
            }
            let key = mapping.marc;
            if table.insert(key, mapping).is_some() {
                return Err(MarcError::InvalidTable(format!(
                    "{id}: duplicate MARC code {key:X}"
                )));
            }
        }
        Ok(CharacterSet {
            id,
            mappings: table,
        })
    }

    /// Identifier of this set.
    #[must_use]
    pub fn id(&self) -> CharacterSetId {
        self.id
    }

    /// Human-readable name of this set.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Number of bytes that encode one character.
    #[must_use]
    pub fn byte_width(&self) -> usize {
        self.id.byte_width()
    }

    /// Look up the character encoded at the start of `bytes`.
    ///
    /// Only the first [`byte_width`](Self::byte_width) bytes are examined;
    /// a slice shorter than that never matches.
    #[must_use]
    pub fn lookup(&self, bytes: &[u8]) -> Option<&CodeMapping> {
        let unit = bytes.get(..self.byte_width())?;
        self.lookup_code(code_from_bytes(unit))
    }

    /// Look up a MARC code given as an integer.
    #[must_use]
    pub fn lookup_code(&self, code: u32) -> Option<&CodeMapping> {
        self.mappings.get(&code)
    }

    /// Whether the character at the start of `bytes` is a combining mark.
    #[must_use]
    pub fn is_combining(&self, bytes: &[u8]) -> bool {
        self.lookup(bytes).is_some_and(CodeMapping::is_combining)
    }

    /// Iterate over all mappings in table order.
    pub fn mappings(&self) -> impl Iterator<Item = &CodeMapping> {
        self.mappings.values()
    }

    /// Number of mappings in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the set has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Fold a byte unit into a big-endian integer key.
pub(crate) fn code_from_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_known_finals() {
        assert_eq!(CharacterSetId::from_byte(b'B'), Some(CharacterSetId::BasicLatin));
        assert_eq!(CharacterSetId::from_byte(b'1'), Some(CharacterSetId::EACC));
        assert_eq!(CharacterSetId::from_byte(b'3'), Some(CharacterSetId::BasicArabic));
        assert_eq!(CharacterSetId::from_byte(b'4'), Some(CharacterSetId::ExtendedArabic));
        assert_eq!(CharacterSetId::from_byte(b'N'), Some(CharacterSetId::BasicCyrillic));
        assert_eq!(CharacterSetId::from_byte(b'Q'), Some(CharacterSetId::ExtendedCyrillic));
        assert_eq!(CharacterSetId::from_byte(b'C'), None);
        assert_eq!(CharacterSetId::from_byte(b'Z'), None);
    }

    #[test]
    fn test_code_round_trips_through_from_byte() {
        for id in CharacterSetId::ALL {
            if id == CharacterSetId::Controls {
                continue;
            }
            assert_eq!(CharacterSetId::from_byte(id.code()), Some(id));
        }
    }

    #[test]
    fn test_try_from_unknown_is_error() {
        assert_eq!(
            CharacterSetId::try_from(b'Z'),
            Err(MarcError::UnknownCharset(b'Z'))
        );
        assert_eq!(CharacterSetId::try_from(b'S'), Ok(CharacterSetId::BasicGreek));
    }

    #[test]
    fn test_mapping_from_hex_single_byte() {
        let m = CodeMapping::from_hex(
            CharacterSetId::BasicLatin,
            "41",
            "0041",
            "LATIN CAPITAL LETTER A",
            false,
        )
        .unwrap();
        assert_eq!(m.marc(), 0x41);
        assert_eq!(m.unicode(), 'A');
        assert_eq!(m.marc_hex(), "41");
        assert_eq!(m.unicode_hex(), "0041");
        assert_eq!(m.charset_code(), b'B');
        assert_eq!(m.marc_bytes().as_slice(), &[0x41]);
    }

    #[test]
    fn test_mapping_from_hex_eacc() {
        let m = CodeMapping::from_hex(CharacterSetId::EACC, "213021", "4E00", "CJK", false)
            .unwrap();
        assert_eq!(m.marc_bytes().as_slice(), &[0x21, 0x30, 0x21]);
        assert_eq!(m.marc_hex(), "213021");
        assert_eq!(m.unicode(), '\u{4E00}');
    }

    #[test]
    fn test_mapping_from_hex_rejects_bad_input() {
        assert!(CodeMapping::from_hex(CharacterSetId::EACC, "41", "0041", "", false).is_err());
        assert!(CodeMapping::from_hex(CharacterSetId::BasicLatin, "4G", "0041", "", false).is_err());
        assert!(CodeMapping::from_hex(CharacterSetId::BasicLatin, "41", "D800", "", false).is_err());
        assert!(CodeMapping::from_hex(CharacterSetId::BasicLatin, "41", "xyz", "", false).is_err());
    }

    #[test]
    fn test_from_mappings_rejects_duplicates() {
        let a = CodeMapping::from_hex(CharacterSetId::BasicLatin, "41", "0041", "A", false)
            .unwrap();
        let b = CodeMapping::from_hex(CharacterSetId::BasicLatin, "41", "0042", "B", false)
            .unwrap();
        let err = CharacterSet::from_mappings(CharacterSetId::BasicLatin, vec![a, b]).unwrap_err();
        assert!(matches!(err, MarcError::InvalidTable(_)));
    }

    #[test]
    fn test_from_mappings_rejects_foreign_mapping() {
        let a = CodeMapping::from_hex(CharacterSetId::BasicGreek, "41", "0391", "ALPHA", false)
            .unwrap();
        assert!(CharacterSet::from_mappings(CharacterSetId::BasicLatin, vec![a]).is_err());
    }

    #[test]
    fn test_lookup_and_combining() {
        let set = CharacterSet::from_mappings(
            CharacterSetId::AnselExtendedLatin,
            vec![
                CodeMapping::from_hex(CharacterSetId::AnselExtendedLatin, "E2", "0301", "ACUTE", true)
                    .unwrap(),
                CodeMapping::from_hex(CharacterSetId::AnselExtendedLatin, "A1", "0141", "L STROKE", false)
                    .unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_combining(&[0xE2]));
        assert!(!set.is_combining(&[0xA1]));
        assert!(!set.is_combining(&[0x41]));
        assert_eq!(set.lookup(&[0xA1, 0x41]).map(CodeMapping::unicode), Some('\u{0141}'));
        assert!(set.lookup(&[]).is_none());
    }

    #[test]
    fn test_multibyte_lookup_needs_full_unit() {
        let set = CharacterSet::from_mappings(
            CharacterSetId::EACC,
            vec![CodeMapping::from_hex(CharacterSetId::EACC, "213021", "4E00", "ONE", false).unwrap()],
        )
        .unwrap();
        assert_eq!(set.lookup(&[0x21, 0x30, 0x21]).map(CodeMapping::unicode), Some('\u{4E00}'));
        assert!(set.lookup(&[0x21, 0x30]).is_none());
    }
}
