//! Integration tests for MARC-8 decoding through the public API

mod common;

use common::{decode_from, decode_with_diagnostics};
use marc8_bridge::{
    decode_bytes, decode_marc8, decode_with_state, CharacterSet, CharacterSetId,
    CharacterSetRegistry, CodeMapping, DecoderConfig, DiagnosticKind, Marc8Decoder,
    MarcEncoding, UnmappedPolicy, WorkingSetState,
};
use std::sync::Arc;

#[test]
fn test_escape_to_ascii_then_letters() {
    assert_eq!(decode_marc8(&[0x1B, 0x73, 0x41, 0x42]), "AB");
}

#[test]
fn test_greek_symbol_then_restore() {
    // ESC g selects Greek symbols into G0, ESC s restores Basic Latin
    assert_eq!(decode_marc8(b"\x1Bga\x1Bsa"), "\u{3B1}a");
}

#[test]
fn test_single_unmapped_byte_silent() {
    let decoded = decode_with_state(
        &[0x7F],
        WorkingSetState::default(),
        &DecoderConfig::default(),
        CharacterSetRegistry::global(),
    );
    assert_eq!(decoded.text, "");
    assert!(decoded.diagnostics.is_empty());
}

#[test]
fn test_lone_escape_is_empty() {
    assert_eq!(decode_marc8(&[0x1B]), "");
}

#[test]
fn test_catalog_title_with_diacritics() {
    // "Les misérables", "Ångström" and "São Paulo" as cataloged in MARC-8
    assert_eq!(decode_marc8(b"Les mis\xE2erables"), "Les mise\u{301}rables");
    assert_eq!(decode_marc8(b"\xEAAngstr\xE8om"), "A\u{30A}ngstro\u{308}m");
    assert_eq!(decode_marc8(b"S\xE4ao Paulo"), "Sa\u{303}o Paulo");
}

#[test]
fn test_ansel_spacing_characters() {
    // Polish L with stroke, ligature ae, British pound
    assert_eq!(decode_marc8(&[0xA1, 0xB5, 0xB9]), "\u{141}\u{E6}\u{A3}");
}

#[test]
fn test_mixed_scripts_in_one_field() {
    let bytes = b"Tolsto\xE6i, L. \x1B(NWOJNA I MIR\x1B(B";
    assert_eq!(
        decode_marc8(bytes),
        "Tolstoi\u{306}, L. \u{432}\u{43E}\u{439}\u{43D}\u{430} \u{438} \u{43C}\u{438}\u{440}"
    );
}

#[test]
fn test_starting_registers() {
    assert_eq!(
        decode_from(CharacterSetId::BasicHebrew, CharacterSetId::AnselExtendedLatin, b"`a"),
        "\u{5D0}\u{5D1}"
    );
    assert_eq!(
        decode_from(CharacterSetId::BasicLatin, CharacterSetId::BasicCyrillic, &[0xC1]),
        "\u{430}"
    );
}

#[test]
fn test_eacc_with_space_and_return_to_ascii() {
    let bytes = b"\x1B$1\x21\x30\x21 \x21\x30\x28\x1B(B2023";
    assert_eq!(decode_marc8(bytes), "\u{4E00} \u{4E8C}2023");
}

#[test]
fn test_diagnostics_positions() {
    let decoded = decode_with_diagnostics(b"a\x7F\x1B(Zb\x1B");
    assert_eq!(decoded.text, "ab");
    let kinds: Vec<_> = decoded
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.position))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (DiagnosticKind::UnmappedByte, 1),
            (DiagnosticKind::UnknownCharset, 2),
            (DiagnosticKind::TruncatedEscape, 6),
        ]
    );
}

#[test]
fn test_diagnostic_display() {
    let decoded = decode_with_diagnostics(b"abc\xFF");
    assert_eq!(
        decoded.diagnostics[0].to_string(),
        "unmapped MARC-8 byte 0xFF at position 3 (G0: Basic Latin (ASCII), G1: Extended Latin (ANSEL))"
    );
}

#[test]
fn test_replacement_policy_counts() {
    let config = DecoderConfig::default()
        .with_unmapped(UnmappedPolicy::Replace)
        .with_diagnostics(true);
    let mut decoder = Marc8Decoder::with_config(config);
    assert_eq!(decoder.decode(b"\x7F-\xFF"), "\u{FFFD}-\u{FFFD}");
    assert_eq!(decoder.diagnostics().len(), 2);
}

#[test]
fn test_decoder_state_carries_between_fields() {
    let mut decoder = Marc8Decoder::new();
    assert_eq!(decoder.decode(b"\x1B(NDA"), "\u{434}\u{430}");
    assert_eq!(decoder.decode(b"NET"), "\u{43D}\u{435}\u{442}");
    decoder.reset();
    assert_eq!(decoder.decode(b"NET"), "NET");
}

#[test]
fn test_leader_dispatch() {
    let encoding = MarcEncoding::from_leader_char(' ').expect("valid leader char");
    assert_eq!(
        decode_bytes(b"Caf\xE2e", encoding).expect("MARC-8 never fails"),
        "Cafe\u{301}"
    );
    let encoding = MarcEncoding::from_leader_char('a').expect("valid leader char");
    assert_eq!(
        decode_bytes("Café".as_bytes(), encoding).expect("valid UTF-8"),
        "Café"
    );
}

#[test]
fn test_custom_table() {
    let mappings = [
        ("41", "0391", "GREEK CAPITAL LETTER ALPHA", false),
        ("42", "0392", "GREEK CAPITAL LETTER BETA", false),
        ("21", "0301", "COMBINING ACUTE ACCENT", true),
    ]
    .iter()
    .map(|&(marc, unicode, name, combining)| {
        CodeMapping::from_hex(CharacterSetId::BasicGreek, marc, unicode, name, combining)
    })
    .collect::<Result<Vec<_>, _>>()
    .expect("well-formed rows");
    let set = CharacterSet::from_mappings(CharacterSetId::BasicGreek, mappings)
        .expect("no duplicate codes");

    let registry = CharacterSetRegistry::new();
    let state = WorkingSetState::new(
        Arc::new(set),
        registry.get(CharacterSetId::AnselExtendedLatin),
    );
    let mut decoder =
        Marc8Decoder::with_registry(DecoderConfig::default(), &registry).with_state(state);
    assert_eq!(decoder.decode(b"!AB"), "\u{391}\u{301}\u{392}");
}

#[test]
fn test_malformed_table_row() {
    assert!(
        CodeMapping::from_hex(CharacterSetId::EACC, "41", "4E00", "bad width", false).is_err()
    );
    assert!(
        CodeMapping::from_hex(CharacterSetId::BasicLatin, "41", "D800", "surrogate", false)
            .is_err()
    );
}
