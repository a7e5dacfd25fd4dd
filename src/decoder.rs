//! MARC-8 decoder.
//!
//! The decoder scans a MARC-8 byte string left to right:
//!
//! 1. An ESC byte starts an escape sequence, which may reassign G0 or G1.
//! 2. Combining marks are collected until their base character is reached.
//! 3. The base character is looked up in G0, then G1, then the control set.
//! 4. The base character is written, followed by its marks.
//!
//! Decoding never fails. Unmapped bytes contribute nothing (or U+FFFD, see
//! [`UnmappedPolicy`]) and, with diagnostics enabled, are reported as
//! [`Diagnostic`]s.
//!
//! [`decode_with_state`] is the core: it takes the register state as a value
//! and returns the state left at the end of the input, so independent inputs
//! can be decoded on any number of threads. [`Marc8Decoder`] wraps it for
//! callers that want registers to persist between calls.

use std::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::charset::CharacterSetId;
use crate::combining::CombiningRun;
use crate::config::{DecoderConfig, UnmappedPolicy};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::escape::{EscapeSequence, ESC};
use crate::registry::CharacterSetRegistry;
use crate::state::WorkingSetState;

/// Result of decoding one input.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Decoded text
    pub text: String,
    /// Register state at the end of the input
    pub state: WorkingSetState,
    /// Diagnostics, empty unless enabled in the configuration
    pub diagnostics: Vec<Diagnostic>,
}

/// Decode MARC-8 bytes starting from the default registers.
///
/// # Examples
///
/// ```
/// use marc8_bridge::decode_marc8;
///
/// // combining acute (0xE2) precedes its base letter in MARC-8
/// assert_eq!(decode_marc8(b"Caf\xE2e"), "Cafe\u{301}");
/// ```
#[must_use]
pub fn decode_marc8(bytes: &[u8]) -> String {
    decode_with_state(
        bytes,
        WorkingSetState::default(),
        &DecoderConfig::default(),
        CharacterSetRegistry::global(),
    )
    .text
}

/// Decode MARC-8 bytes from an explicit register state.
#[must_use]
pub fn decode_with_state(
    bytes: &[u8],
    state: WorkingSetState,
    config: &DecoderConfig,
    registry: &CharacterSetRegistry,
) -> Decoded {
    if is_plain_ascii(bytes, &state, registry) {
        return Decoded {
            text: bytes.iter().copied().map(char::from).collect(),
            state,
            diagnostics: Vec::new(),
        };
    }

    let mut session = Session {
        bytes,
        state,
        config,
        registry,
        text: String::with_capacity(bytes.len()),
        diagnostics: Vec::new(),
    };
    session.run();
    Decoded {
        text: session.text,
        state: session.state,
        diagnostics: session.diagnostics,
    }
}

/// Printable ASCII with the standard G0 decodes to itself.
fn is_plain_ascii(bytes: &[u8], state: &WorkingSetState, registry: &CharacterSetRegistry) -> bool {
    Arc::ptr_eq(state.g0(), &registry.get(CharacterSetId::BasicLatin))
        && bytes.iter().all(|b| (0x20..=0x7E).contains(b))
}

struct Session<'a> {
    bytes: &'a [u8],
    state: WorkingSetState,
    config: &'a DecoderConfig,
    registry: &'a CharacterSetRegistry,
    text: String,
    diagnostics: Vec<Diagnostic>,
}

impl Session<'_> {
    fn run(&mut self) {
        let bytes = self.bytes;
        let mut pending: SmallVec<[char; 4]> = SmallVec::new();
        let mut pending_span = 0..0;
        let mut cursor = 0;

        while cursor < bytes.len() {
            if bytes[cursor] == ESC {
                let sequence = EscapeSequence::parse(bytes, cursor);
                self.escape(sequence, cursor);
                cursor += sequence.len();
                continue;
            }

            let run = CombiningRun::collect(bytes, cursor, &self.state);
            if !run.is_empty() {
                if pending.is_empty() {
                    pending_span.start = cursor;
                }
                pending_span.end = run.end();
                pending.extend_from_slice(run.marks());
            }
            cursor = run.end();

            // marks carry over an escape sequence to the next base character
            if cursor >= bytes.len() || bytes[cursor] == ESC {
                continue;
            }

            if let Some(found) = self.state.lookup_with_fallback(bytes, cursor) {
                self.text.push(found.unicode);
                cursor += found.width;
            } else {
                cursor += self.unmapped(cursor);
            }
            self.text.extend(pending.drain(..));
        }

        if !pending.is_empty() {
            self.report(
                DiagnosticKind::UnattachedCombining,
                pending_span.start,
                pending_span,
            );
            self.text.extend(pending.drain(..));
        }
    }

    fn escape(&mut self, sequence: EscapeSequence, cursor: usize) {
        let span = cursor..cursor + sequence.len();
        match sequence {
            EscapeSequence::Designate { .. } => {
                sequence.apply(&mut self.state, self.registry);
            },
            EscapeSequence::UnknownCharset { .. } => {
                self.report(DiagnosticKind::UnknownCharset, cursor, span);
            },
            EscapeSequence::Truncated { .. } => {
                self.report(DiagnosticKind::TruncatedEscape, cursor, span);
            },
            EscapeSequence::Unrecognized { .. } => {
                self.report(DiagnosticKind::UnrecognizedEscape, cursor, span);
            },
        }
    }

    /// Handle a byte no table maps. Returns the number of bytes to skip.
    fn unmapped(&mut self, cursor: usize) -> usize {
        let width = self.state.g0().byte_width();
        let skip = if width > 1
            && (0x21..=0x7E).contains(&self.bytes[cursor])
            && cursor + width <= self.bytes.len()
        {
            width
        } else {
            1
        };

        if self.config.unmapped == UnmappedPolicy::Replace {
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
        self.report(DiagnosticKind::UnmappedByte, cursor, cursor..cursor + skip);
        skip
    }

    fn report(&mut self, kind: DiagnosticKind, position: usize, span: Range<usize>) {
        if !self.config.diagnostics {
            return;
        }
        let diagnostic = Diagnostic::new(kind, position, &self.bytes[span], &self.state);
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }
}

/// A MARC-8 decoder whose registers persist between calls.
///
/// Escape sequences seen by one [`decode`](Self::decode) call stay in force
/// for the next one until [`reset`](Self::reset) restores the initial
/// registers. Use one decoder per decoding job, or [`decode_with_state`] when
/// decoding independent inputs concurrently.
///
/// # Examples
///
/// ```
/// use marc8_bridge::{DecoderConfig, Marc8Decoder};
///
/// let mut decoder = Marc8Decoder::with_config(DecoderConfig::default().with_diagnostics(true));
/// assert_eq!(decoder.decode(b"H\x1Bb2\x1BsO"), "H\u{2082}O");
/// assert_eq!(decoder.decode(b"A\x7F"), "A");
/// assert_eq!(decoder.diagnostics().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Marc8Decoder<'r> {
    registry: &'r CharacterSetRegistry,
    config: DecoderConfig,
    initial: WorkingSetState,
    state: WorkingSetState,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Marc8Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Marc8Decoder<'static> {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Create a decoder with the given configuration and the global registry.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self::with_registry(config, CharacterSetRegistry::global())
    }
}

impl<'r> Marc8Decoder<'r> {
    /// Create a decoder that resolves character sets through `registry`.
    #[must_use]
    pub fn with_registry(config: DecoderConfig, registry: &'r CharacterSetRegistry) -> Self {
        let initial = WorkingSetState::from_ids(config.g0, config.g1, registry);
        Marc8Decoder {
            registry,
            config,
            state: initial.clone(),
            initial,
            diagnostics: Vec::new(),
        }
    }

    /// Start from explicit working sets instead of the configured ones.
    ///
    /// [`reset`](Self::reset) returns to this state.
    #[must_use]
    pub fn with_state(mut self, state: WorkingSetState) -> Self {
        self.initial = state.clone();
        self.state = state;
        self
    }

    /// Decode MARC-8 bytes, continuing from the current registers.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let decoded = decode_with_state(bytes, self.state.clone(), &self.config, self.registry);
        self.state = decoded.state;
        self.diagnostics.extend(decoded.diagnostics);
        decoded.text
    }

    /// Restore the initial registers and clear collected diagnostics.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.diagnostics.clear();
    }

    /// Current register state.
    #[must_use]
    pub fn state(&self) -> &WorkingSetState {
        &self.state
    }

    /// The decoder configuration.
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Diagnostics collected since creation or the last reset.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag_config() -> DecoderConfig {
        DecoderConfig::default().with_diagnostics(true)
    }

    #[test]
    fn test_marc8_ascii() {
        assert_eq!(decode_marc8(b"Hello, World"), "Hello, World");
    }

    #[test]
    fn test_escape_s_then_ascii() {
        assert_eq!(decode_marc8(&[0x1B, 0x73, 0x41, 0x42]), "AB");
    }

    #[test]
    fn test_marc8_escape_sequence_g0() {
        assert_eq!(decode_marc8(b"\x1B(BHello"), "Hello");
    }

    #[test]
    fn test_marc8_high_byte_range_uses_g1() {
        assert_eq!(decode_marc8(&[0x41, 0xA1]), "A\u{0141}");
    }

    #[test]
    fn test_combining_mark_follows_base() {
        // ANSEL acute before 'e'
        assert_eq!(decode_marc8(&[0xE2, b'e']), "e\u{0301}");
    }

    #[test]
    fn test_multiple_marks_keep_order() {
        // dot below, then circumflex, on 'e' (Vietnamese)
        assert_eq!(decode_marc8(&[0xF2, 0xE3, b'e']), "e\u{0323}\u{0302}");
    }

    #[test]
    fn test_marks_carry_across_escape() {
        assert_eq!(decode_marc8(b"\xE2\x1BsA"), "A\u{0301}");
    }

    #[test]
    fn test_unattached_marks_emitted() {
        let decoded = decode_with_state(
            &[b'a', 0xE8],
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "a\u{0308}");
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(
            decoded.diagnostics[0].kind,
            DiagnosticKind::UnattachedCombining
        );
        assert_eq!(decoded.diagnostics[0].position, 1);
        assert_eq!(decoded.diagnostics[0].bytes.as_slice(), &[0xE8]);
    }

    #[test]
    fn test_unattached_marks_exclude_trailing_escape() {
        let decoded = decode_with_state(
            b"\xE2\xE8\x1Bs",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "\u{0301}\u{0308}");
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].position, 0);
        assert_eq!(decoded.diagnostics[0].bytes.as_slice(), &[0xE2, 0xE8]);
    }

    #[test]
    fn test_marc8_subscript_with_reset() {
        assert_eq!(decode_marc8(b"H\x1Bb2\x1BsO"), "H\u{2082}O");
    }

    #[test]
    fn test_marc8_superscript_plus_minus() {
        assert_eq!(decode_marc8(b"\x1Bp1+2-3"), "\u{B9}\u{207A}\u{B2}\u{207B}\u{B3}");
    }

    #[test]
    fn test_marc8_greek_symbols_all() {
        assert_eq!(decode_marc8(b"\x1Bgabc"), "\u{3B1}\u{3B2}\u{3B3}");
    }

    #[test]
    fn test_marc8_hebrew_in_g1() {
        // ESC ) 2, then alef, bet, gimel in the upper half
        let decoded = decode_marc8(b"\x1B)2\xE0\xE1\xE2\x1B)!E");
        assert_eq!(decoded, "\u{5D0}\u{5D1}\u{5D2}");
    }

    #[test]
    fn test_low_byte_not_taken_from_g1() {
        // G0 Greek symbols has no 0x41 and G1 Cyrillic only serves 0xA1-0xFE
        let decoded = decode_with_state(
            b"\x1Bg\x1B)NA",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].kind, DiagnosticKind::UnmappedByte);
        assert_eq!(decoded.diagnostics[0].position, 5);
        assert_eq!(
            (decoded.diagnostics[0].g0, decoded.diagnostics[0].g1),
            (CharacterSetId::GreekSymbols, CharacterSetId::BasicCyrillic)
        );
    }

    #[test]
    fn test_ansel_designated_to_g0() {
        // ESC ( ! E: 0x62 reads as 0xE2 (acute), 0x21 as 0xA1 (L with stroke)
        assert_eq!(decode_marc8(b"\x1B(!Eb!"), "\u{0141}\u{0301}");
        // the acute carries over the switch back to ASCII
        assert_eq!(decode_marc8(b"\x1B(!Eb\x1B(Be"), "e\u{0301}");
    }

    #[test]
    fn test_bang_with_other_final_is_unknown() {
        let decoded = decode_with_state(
            b"\x1B)!NA",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "A");
        assert_eq!(
            decoded.state.ids(),
            (CharacterSetId::BasicLatin, CharacterSetId::AnselExtendedLatin)
        );
        assert_eq!(decoded.diagnostics[0].kind, DiagnosticKind::UnknownCharset);
        assert_eq!(decoded.diagnostics[0].bytes.as_slice(), b"\x1B)!N");
    }

    #[test]
    fn test_marc8_cyrillic_in_g0() {
        // ESC ( N: 0x4B 0x4E 0x49 0x47 0x41 = к н и г а
        assert_eq!(decode_marc8(b"\x1B(NKNIGA\x1B(B!"), "\u{43A}\u{43D}\u{438}\u{433}\u{430}!");
    }

    #[test]
    fn test_marc8_eacc() {
        let bytes = b"\x1B$1\x21\x30\x21\x21\x30\x28\x1B(BA";
        assert_eq!(decode_marc8(bytes), "\u{4E00}\u{4E8C}A");
    }

    #[test]
    fn test_eacc_space() {
        let bytes = b"\x1B$1\x21\x30\x21 \x21\x30\x21";
        assert_eq!(decode_marc8(bytes), "\u{4E00} \u{4E00}");
    }

    #[test]
    fn test_unmapped_eacc_unit_skipped_whole() {
        let decoded = decode_with_state(
            b"\x1B$1\x7E\x7E\x7E\x21\x30\x21",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "\u{4E00}");
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].bytes.as_slice(), &[0x7E, 0x7E, 0x7E]);
    }

    #[test]
    fn test_control_characters_pass_through() {
        assert_eq!(decode_marc8(b"a\nb"), "a\nb");
    }

    #[test]
    fn test_unmapped_byte_is_empty() {
        assert_eq!(decode_marc8(&[0x7F]), "");
    }

    #[test]
    fn test_unmapped_byte_replace_policy() {
        let config = DecoderConfig::default().with_unmapped(UnmappedPolicy::Replace);
        let decoded = decode_with_state(
            b"a\x7Fb",
            WorkingSetState::default(),
            &config,
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "a\u{FFFD}b");
        assert!(decoded.diagnostics.is_empty());
    }

    #[test]
    fn test_unmapped_byte_diagnostic() {
        let decoded = decode_with_state(
            b"ab\x7F",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "ab");
        assert_eq!(decoded.diagnostics.len(), 1);
        let diag = &decoded.diagnostics[0];
        assert_eq!(diag.kind, DiagnosticKind::UnmappedByte);
        assert_eq!(diag.position, 2);
        assert_eq!(diag.hex(), "0x7F");
        assert_eq!(diag.g0, CharacterSetId::BasicLatin);
        assert_eq!(diag.g1, CharacterSetId::AnselExtendedLatin);
    }

    #[test]
    fn test_marks_after_unmapped_base() {
        assert_eq!(decode_marc8(&[0xE2, 0x7F, b'x']), "\u{301}x");
    }

    #[test]
    fn test_truncated_escape_alone() {
        let decoded = decode_with_state(
            &[0x1B],
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "");
        assert_eq!(
            decoded.state.ids(),
            (CharacterSetId::BasicLatin, CharacterSetId::AnselExtendedLatin)
        );
        assert_eq!(decoded.diagnostics[0].kind, DiagnosticKind::TruncatedEscape);
    }

    #[test]
    fn test_marc8_incomplete_escape_at_end() {
        assert_eq!(decode_marc8(b"Text\x1B"), "Text");
        assert_eq!(decode_marc8(b"Text\x1B("), "Text");
    }

    #[test]
    fn test_unrecognized_escape_skips_three() {
        assert_eq!(decode_marc8(b"\x1B\xFFAB"), "B");
        assert_eq!(decode_marc8(b"\x1B\xFF"), "");
    }

    #[test]
    fn test_unknown_charset_keeps_registers() {
        let decoded = decode_with_state(
            b"\x1B(ZAB",
            WorkingSetState::default(),
            &diag_config(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(decoded.text, "AB");
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].kind, DiagnosticKind::UnknownCharset);
    }

    #[test]
    fn test_state_returned() {
        let decoded = decode_with_state(
            b"\x1B)NA",
            WorkingSetState::default(),
            &DecoderConfig::default(),
            CharacterSetRegistry::global(),
        );
        assert_eq!(
            decoded.state.ids(),
            (CharacterSetId::BasicLatin, CharacterSetId::BasicCyrillic)
        );
    }

    #[test]
    fn test_decoder_registers_persist_until_reset() {
        let mut decoder = Marc8Decoder::new();
        assert_eq!(decoder.decode(b"\x1Bga"), "\u{3B1}");
        // still in Greek symbols
        assert_eq!(decoder.decode(b"a"), "\u{3B1}");
        decoder.reset();
        assert_eq!(decoder.decode(b"a"), "a");
    }

    #[test]
    fn test_decoder_with_config_registers() {
        let config = DecoderConfig::default().with_g0(CharacterSetId::BasicCyrillic);
        let mut decoder = Marc8Decoder::with_config(config);
        assert_eq!(decoder.decode(b"DA"), "\u{434}\u{430}");
    }

    #[test]
    fn test_decoder_with_state() {
        let registry = CharacterSetRegistry::new();
        let state = WorkingSetState::from_ids(
            CharacterSetId::BasicGreek,
            CharacterSetId::AnselExtendedLatin,
            &registry,
        );
        let mut decoder =
            Marc8Decoder::with_registry(DecoderConfig::default(), &registry).with_state(state);
        assert_eq!(decoder.decode(b"a"), "\u{3B1}");
        decoder.decode(b"\x1Bs");
        decoder.reset();
        assert_eq!(decoder.state().g0().id(), CharacterSetId::BasicGreek);
    }

    #[test]
    fn test_take_diagnostics() {
        let mut decoder = Marc8Decoder::with_config(diag_config());
        decoder.decode(b"\x7F");
        assert_eq!(decoder.take_diagnostics().len(), 1);
        assert!(decoder.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostics_off_by_default() {
        let mut decoder = Marc8Decoder::new();
        decoder.decode(b"\x7F\x1B");
        assert!(decoder.diagnostics().is_empty());
    }
}
