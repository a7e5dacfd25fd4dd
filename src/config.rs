//! Decoder configuration.
//!
//! [`DecoderConfig`] holds the constructor-time options of a
//! [`Marc8Decoder`](crate::decoder::Marc8Decoder): the initial working sets,
//! whether to collect diagnostics, and what to emit for unmapped bytes.

use serde::{Deserialize, Serialize};

use crate::charset::CharacterSetId;

/// What to emit for a byte that no table maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnmappedPolicy {
    /// Emit nothing
    #[default]
    Skip,
    /// Emit U+FFFD REPLACEMENT CHARACTER
    Replace,
}

/// Configuration for MARC-8 decoding.
///
/// # Examples
///
/// ```
/// use marc8_bridge::{CharacterSetId, DecoderConfig};
///
/// let config = DecoderConfig::default()
///     .with_g1(CharacterSetId::BasicCyrillic)
///     .with_diagnostics(true);
/// assert_eq!(config.g0, CharacterSetId::BasicLatin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Initial G0 set.
    pub g0: CharacterSetId,

    /// Initial G1 set.
    pub g1: CharacterSetId,

    /// Collect diagnostics for recovered anomalies.
    ///
    /// When false (default) decoding is silent.
    pub diagnostics: bool,

    /// Output for unmapped bytes.
    pub unmapped: UnmappedPolicy,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            g0: CharacterSetId::BasicLatin,
            g1: CharacterSetId::AnselExtendedLatin,
            diagnostics: false,
            unmapped: UnmappedPolicy::Skip,
        }
    }
}

impl DecoderConfig {
    /// Set the initial G0 set.
    #[must_use]
    pub fn with_g0(mut self, g0: CharacterSetId) -> Self {
        self.g0 = g0;
        self
    }

    /// Set the initial G1 set.
    #[must_use]
    pub fn with_g1(mut self, g1: CharacterSetId) -> Self {
        self.g1 = g1;
        self
    }

    /// Enable or disable diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Set the unmapped-byte policy.
    #[must_use]
    pub fn with_unmapped(mut self, unmapped: UnmappedPolicy) -> Self {
        self.unmapped = unmapped;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.g0, CharacterSetId::BasicLatin);
        assert_eq!(config.g1, CharacterSetId::AnselExtendedLatin);
        assert!(!config.diagnostics);
        assert_eq!(config.unmapped, UnmappedPolicy::Skip);
    }

    #[test]
    fn test_builder() {
        let config = DecoderConfig::default()
            .with_g0(CharacterSetId::BasicGreek)
            .with_unmapped(UnmappedPolicy::Replace);
        assert_eq!(config.g0, CharacterSetId::BasicGreek);
        assert_eq!(config.unmapped, UnmappedPolicy::Replace);
    }
}
