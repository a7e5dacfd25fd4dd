//! Built-in MARC-8 character set tables.
//!
//! Rows follow the Library of Congress MARC-8 code tables. Sets that are
//! ISO 2022 94-character sets (Hebrew, Cyrillic, Arabic, Greek, EACC) are
//! stored in their 7-bit form; ANSEL is stored in its 8-bit form
//! (0xA1-0xFE) as published.

mod arabic;
mod basic;
mod cjk;
mod cyrillic;
mod greek;
mod hebrew;

use crate::charset::{CharacterSet, CharacterSetId, Row};

/// Raw rows for a character set.
pub(crate) fn rows(id: CharacterSetId) -> &'static [Row] {
    match id {
        CharacterSetId::BasicLatin => basic::BASIC_LATIN,
        CharacterSetId::AnselExtendedLatin => basic::ANSEL,
        CharacterSetId::Controls => basic::CONTROLS,
        CharacterSetId::Subscript => basic::SUBSCRIPTS,
        CharacterSetId::Superscript => basic::SUPERSCRIPTS,
        CharacterSetId::GreekSymbols => basic::GREEK_SYMBOLS,
        CharacterSetId::BasicHebrew => hebrew::BASIC_HEBREW,
        CharacterSetId::BasicCyrillic => cyrillic::BASIC_CYRILLIC,
        CharacterSetId::ExtendedCyrillic => cyrillic::EXTENDED_CYRILLIC,
        CharacterSetId::BasicArabic => arabic::BASIC_ARABIC,
        CharacterSetId::ExtendedArabic => arabic::EXTENDED_ARABIC,
        CharacterSetId::BasicGreek => greek::BASIC_GREEK,
        CharacterSetId::EACC => cjk::EACC,
    }
}

/// Build the table for a character set.
pub(crate) fn build(id: CharacterSetId) -> CharacterSet {
    CharacterSet::from_rows(id, rows(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_codes() {
        for id in CharacterSetId::ALL {
            let mut seen = HashSet::new();
            for row in rows(id) {
                assert!(seen.insert(row.0), "{id}: duplicate code {:X}", row.0);
            }
            assert_eq!(build(id).len(), rows(id).len());
        }
    }

    #[test]
    fn test_codes_fit_byte_width() {
        for id in CharacterSetId::ALL {
            let limit = if id.byte_width() == 3 { 0x0100_0000 } else { 0x100 };
            for row in rows(id) {
                assert!(row.0 < limit, "{id}: code {:X} too wide", row.0);
            }
        }
    }

    #[test]
    fn test_every_table_is_populated() {
        for id in CharacterSetId::ALL {
            assert!(!rows(id).is_empty(), "{id} has no rows");
        }
    }

    #[test]
    fn test_combining_marks_are_nonspacing() {
        // Every combining row must map into a Unicode combining block.
        for id in CharacterSetId::ALL {
            for &(code, ch, name, combining) in rows(id) {
                if combining {
                    let cp = u32::from(ch);
                    let in_block = (0x0300..=0x036F).contains(&cp)
                        || (0x0591..=0x05C7).contains(&cp)
                        || (0x064B..=0x0670).contains(&cp)
                        || (0xFE20..=0xFE2F).contains(&cp)
                        || cp == 0xFB1E;
                    assert!(in_block, "{id}: {code:X} {name} is not a combining mark");
                }
            }
        }
    }
}
