#![no_main]
use libfuzzer_sys::fuzz_target;
use marc8_bridge::{
    decode_with_state, CharacterSetRegistry, DecoderConfig, UnmappedPolicy, WorkingSetState,
};

fuzz_target!(|data: &[u8]| {
    let registry = CharacterSetRegistry::global();
    let config = DecoderConfig::default()
        .with_diagnostics(true)
        .with_unmapped(UnmappedPolicy::Replace);

    let whole = decode_with_state(data, WorkingSetState::default(), &config, registry);
    for diagnostic in &whole.diagnostics {
        assert!(diagnostic.position < data.len());
    }

    // without diagnostics the text must not change
    let silent = decode_with_state(
        data,
        WorkingSetState::default(),
        &config.with_diagnostics(false),
        registry,
    );
    assert_eq!(whole.text, silent.text);
    assert!(silent.diagnostics.is_empty());
});
