//! Common test helpers shared across the test suite.

use marc8_bridge::{
    decode_with_state, CharacterSetId, CharacterSetRegistry, Decoded, DecoderConfig,
    WorkingSetState,
};

/// Decodes `bytes` starting from the given registers.
#[allow(dead_code)]
pub fn decode_from(g0: CharacterSetId, g1: CharacterSetId, bytes: &[u8]) -> String {
    let registry = CharacterSetRegistry::global();
    decode_with_state(
        bytes,
        WorkingSetState::from_ids(g0, g1, registry),
        &DecoderConfig::default(),
        registry,
    )
    .text
}

/// Decodes `bytes` from the default registers with diagnostics enabled.
#[allow(dead_code)]
pub fn decode_with_diagnostics(bytes: &[u8]) -> Decoded {
    decode_with_state(
        bytes,
        WorkingSetState::default(),
        &DecoderConfig::default().with_diagnostics(true),
        CharacterSetRegistry::global(),
    )
}
