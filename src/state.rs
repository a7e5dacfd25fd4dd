//! Working-set registers.
//!
//! A MARC-8 byte stream always has two character sets in force: G0 and G1.
//! [`WorkingSetState`] holds both and implements the lookup chain the decoder
//! uses for every character: G0, then G1, then the control table.
//!
//! The state is a plain value. It is passed into and returned from each
//! decode call, so independent inputs can be decoded concurrently while the
//! tables themselves stay shared.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::charset::{CharacterSet, CharacterSetId, CodeMapping};
use crate::registry::{control_set, CharacterSetRegistry};

/// One of the two working-set registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    /// Primary set, conventionally for bytes 0x21-0x7E
    G0,
    /// Secondary set, conventionally for bytes 0xA1-0xFE
    G1,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::G0 => f.write_str("G0"),
            Register::G1 => f.write_str("G1"),
        }
    }
}

/// A character found by the lookup chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Decoded character
    pub unicode: char,
    /// Whether the character is a combining mark
    pub combining: bool,
    /// Number of input bytes consumed
    pub width: usize,
}

impl Resolved {
    fn from_mapping(mapping: &CodeMapping, width: usize) -> Self {
        Resolved {
            unicode: mapping.unicode(),
            combining: mapping.is_combining(),
            width,
        }
    }
}

/// The G0 and G1 registers of a decoding session.
#[derive(Debug, Clone)]
pub struct WorkingSetState {
    g0: Arc<CharacterSet>,
    g1: Arc<CharacterSet>,
}

impl Default for WorkingSetState {
    /// G0 = Basic Latin, G1 = ANSEL, from the global registry.
    fn default() -> Self {
        Self::from_ids(
            CharacterSetId::BasicLatin,
            CharacterSetId::AnselExtendedLatin,
            CharacterSetRegistry::global(),
        )
    }
}

impl WorkingSetState {
    /// Create a state from explicit tables.
    #[must_use]
    pub fn new(g0: Arc<CharacterSet>, g1: Arc<CharacterSet>) -> Self {
        WorkingSetState { g0, g1 }
    }

    /// Create a state by resolving identifiers through a registry.
    #[must_use]
    pub fn from_ids(g0: CharacterSetId, g1: CharacterSetId, registry: &CharacterSetRegistry) -> Self {
        WorkingSetState {
            g0: registry.get(g0),
            g1: registry.get(g1),
        }
    }

    /// Set currently in G0.
    #[must_use]
    pub fn g0(&self) -> &Arc<CharacterSet> {
        &self.g0
    }

    /// Set currently in G1.
    #[must_use]
    pub fn g1(&self) -> &Arc<CharacterSet> {
        &self.g1
    }

    /// Identifiers of the G0 and G1 sets.
    #[must_use]
    pub fn ids(&self) -> (CharacterSetId, CharacterSetId) {
        (self.g0.id(), self.g1.id())
    }

    /// Set held by a register.
    #[must_use]
    pub fn get(&self, register: Register) -> &Arc<CharacterSet> {
        match register {
            Register::G0 => &self.g0,
            Register::G1 => &self.g1,
        }
    }

    /// Replace the set held by a register.
    pub fn designate(&mut self, register: Register, set: Arc<CharacterSet>) {
        match register {
            Register::G0 => self.g0 = set,
            Register::G1 => self.g1 = set,
        }
    }

    /// Look up the character at `cursor` in G0, then G1.
    ///
    /// G1 only sees units made entirely of bytes 0xA1-0xFE. Such a unit is
    /// tried as-is and then with the high bit cleared, so 94-character sets
    /// stored in 7-bit form decode when invoked into the upper half. The
    /// mirror rule holds for G0: a 0x21-0x7E unit missing from the table is
    /// retried with the high bit set, which reaches ANSEL designated to G0.
    #[must_use]
    pub fn lookup(&self, bytes: &[u8], cursor: usize) -> Option<Resolved> {
        let rest = bytes.get(cursor..)?;
        lookup_in(&self.g0, rest, Register::G0).or_else(|| lookup_in(&self.g1, rest, Register::G1))
    }

    /// Look up the character at `cursor` in G0, G1 and then the control set.
    ///
    /// A space that no register maps decodes as U+0020, since the 94-character
    /// and CJK sets leave 0x20 out of their tables.
    #[must_use]
    pub fn lookup_with_fallback(&self, bytes: &[u8], cursor: usize) -> Option<Resolved> {
        if let Some(found) = self.lookup(bytes, cursor) {
            return Some(found);
        }
        let rest = bytes.get(cursor..)?;
        if let Some(mapping) = control_set().lookup(rest) {
            return Some(Resolved::from_mapping(mapping, 1));
        }
        if rest.first() == Some(&b' ') {
            return Some(Resolved {
                unicode: ' ',
                combining: false,
                width: 1,
            });
        }
        None
    }

    /// The combining mark at `cursor`, if G0 or G1 classifies it as one.
    #[must_use]
    pub fn combining_at(&self, bytes: &[u8], cursor: usize) -> Option<Resolved> {
        self.lookup(bytes, cursor).filter(|found| found.combining)
    }
}

fn lookup_in(set: &CharacterSet, rest: &[u8], register: Register) -> Option<Resolved> {
    let width = set.byte_width();
    let unit = rest.get(..width)?;
    let mapping = match register {
        Register::G0 => set.lookup(unit).or_else(|| {
            if unit.iter().all(|b| (0x21..=0x7E).contains(b)) {
                set.lookup_code(shifted_code(unit, |b| b | 0x80))
            } else {
                None
            }
        }),
        Register::G1 => {
            if !unit.iter().all(|b| (0xA1..=0xFE).contains(b)) {
                return None;
            }
            set.lookup(unit)
                .or_else(|| set.lookup_code(shifted_code(unit, |b| b & 0x7F)))
        },
    };
    mapping.map(|mapping| Resolved::from_mapping(mapping, width))
}

fn shifted_code(unit: &[u8], shift: impl Fn(u8) -> u8) -> u32 {
    unit.iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(shift(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(g0: CharacterSetId, g1: CharacterSetId) -> WorkingSetState {
        WorkingSetState::from_ids(g0, g1, CharacterSetRegistry::global())
    }

    #[test]
    fn test_default_registers() {
        let state = WorkingSetState::default();
        assert_eq!(
            state.ids(),
            (CharacterSetId::BasicLatin, CharacterSetId::AnselExtendedLatin)
        );
    }

    #[test]
    fn test_designate_replaces_one_register() {
        let mut state = WorkingSetState::default();
        state.designate(
            Register::G1,
            CharacterSetRegistry::global().get(CharacterSetId::BasicHebrew),
        );
        assert_eq!(
            state.ids(),
            (CharacterSetId::BasicLatin, CharacterSetId::BasicHebrew)
        );
        assert_eq!(state.get(Register::G1).id(), CharacterSetId::BasicHebrew);
    }

    #[test]
    fn test_g0_takes_precedence() {
        let state = state(CharacterSetId::BasicLatin, CharacterSetId::AnselExtendedLatin);
        let found = state.lookup(b"A", 0).unwrap();
        assert_eq!(found.unicode, 'A');
        assert_eq!(found.width, 1);
    }

    #[test]
    fn test_g1_exact_code() {
        let state = WorkingSetState::default();
        let found = state.lookup(&[0xA1], 0).unwrap();
        assert_eq!(found.unicode, '\u{0141}');
        assert!(!found.combining);
    }

    #[test]
    fn test_g1_upper_half_of_seven_bit_set() {
        let state = state(CharacterSetId::BasicLatin, CharacterSetId::BasicHebrew);
        // 0xE0 is 0x60 (alef) invoked into the upper half
        assert_eq!(state.lookup(&[0xE0], 0).unwrap().unicode, '\u{05D0}');
    }

    #[test]
    fn test_g1_ignores_low_bytes() {
        let state = state(CharacterSetId::GreekSymbols, CharacterSetId::BasicCyrillic);
        // 0x41 is Cyrillic a in 7-bit form, but G1 is only invoked from the upper half
        assert!(state.lookup(b"A", 0).is_none());
        assert!(state.lookup_with_fallback(b"A", 0).is_none());
        assert_eq!(state.lookup(&[0xC1], 0).unwrap().unicode, '\u{0430}');
    }

    #[test]
    fn test_g1_ignores_bytes_outside_upper_half() {
        let state = WorkingSetState::default();
        assert!(state.lookup(&[0xFF], 0).is_none());
        assert!(state.lookup(&[0xA0], 0).is_none());
    }

    #[test]
    fn test_ansel_in_g0_lower_half() {
        let state = state(CharacterSetId::AnselExtendedLatin, CharacterSetId::AnselExtendedLatin);
        // 0x21 is 0xA1 (L with stroke), 0x62 is 0xE2 (acute)
        let found = state.lookup(b"!", 0).unwrap();
        assert_eq!(found.unicode, '\u{0141}');
        assert!(!found.combining);
        assert!(state.combining_at(b"b", 0).is_some());
        // published 8-bit codes still resolve directly
        assert_eq!(state.lookup(&[0xA1], 0).unwrap().unicode, '\u{0141}');
    }

    #[test]
    fn test_controls_are_last_resort() {
        let state = WorkingSetState::default();
        assert!(state.lookup(&[0x0A], 0).is_none());
        assert_eq!(state.lookup_with_fallback(&[0x0A], 0).unwrap().unicode, '\n');
        assert_eq!(
            state.lookup_with_fallback(&[0x8D], 0).unwrap().unicode,
            '\u{200D}'
        );
    }

    #[test]
    fn test_combining_at() {
        let state = WorkingSetState::default();
        assert!(state.combining_at(&[0xE2, b'e'], 0).is_some());
        assert!(state.combining_at(&[0xE2, b'e'], 1).is_none());
        assert!(state.combining_at(&[0xE2], 5).is_none());
    }

    #[test]
    fn test_multibyte_g0() {
        let state = state(CharacterSetId::EACC, CharacterSetId::AnselExtendedLatin);
        let found = state.lookup(&[0x21, 0x30, 0x21], 0).unwrap();
        assert_eq!(found.unicode, '\u{4E00}');
        assert_eq!(found.width, 3);
        assert!(state.lookup(&[0x21, 0x30], 0).is_none());
        assert_eq!(state.lookup_with_fallback(b" ", 0).unwrap().unicode, ' ');
    }

    #[test]
    fn test_space_in_94_character_set() {
        let state = state(CharacterSetId::BasicCyrillic, CharacterSetId::AnselExtendedLatin);
        assert!(state.lookup(b" ", 0).is_none());
        assert_eq!(state.lookup_with_fallback(b" ", 0).unwrap().unicode, ' ');
    }
}
