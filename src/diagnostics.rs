//! Non-fatal decoding diagnostics.
//!
//! Legacy catalog data is often dirty, so the decoder never aborts. When
//! diagnostics are enabled it records a [`Diagnostic`] for every anomaly it
//! recovers from and emits the same information as a `tracing` warning.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::charset::CharacterSetId;
use crate::state::WorkingSetState;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Byte found in neither G0, G1 nor the control set
    UnmappedByte,
    /// Escape sequence cut short by the end of input
    TruncatedEscape,
    /// Escape selector matching neither escape technique
    UnrecognizedEscape,
    /// Designation naming an unknown character set
    UnknownCharset,
    /// Combining marks at end of input with no base character
    UnattachedCombining,
}

impl DiagnosticKind {
    fn describe(self) -> &'static str {
        match self {
            DiagnosticKind::UnmappedByte => "unmapped MARC-8 byte",
            DiagnosticKind::TruncatedEscape => "truncated escape sequence",
            DiagnosticKind::UnrecognizedEscape => "unrecognized escape sequence",
            DiagnosticKind::UnknownCharset => "unknown character set in escape sequence",
            DiagnosticKind::UnattachedCombining => "combining mark without base character",
        }
    }
}

/// A single recovered decoding anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Kind of anomaly
    pub kind: DiagnosticKind,
    /// Offset of the offending bytes in the input
    pub position: usize,
    /// The offending bytes
    pub bytes: SmallVec<[u8; 4]>,
    /// Set in G0 when the anomaly was seen
    pub g0: CharacterSetId,
    /// Set in G1 when the anomaly was seen
    pub g1: CharacterSetId,
}

impl Diagnostic {
    /// Build a diagnostic against the current register state.
    #[must_use]
    pub fn new(
        kind: DiagnosticKind,
        position: usize,
        bytes: &[u8],
        state: &WorkingSetState,
    ) -> Self {
        let (g0, g1) = state.ids();
        Diagnostic {
            kind,
            position,
            bytes: SmallVec::from_slice(bytes),
            g0,
            g1,
        }
    }

    /// The offending bytes as `0x..` hex, space separated.
    #[must_use]
    pub fn hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("0x{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Emit the diagnostic as a `tracing` warning.
    pub fn emit(&self) {
        tracing::warn!(
            kind = ?self.kind,
            position = self.position,
            bytes = %self.hex(),
            g0 = self.g0.name(),
            g1 = self.g1.name(),
            "{}",
            self
        );
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at position {} (G0: {}, G1: {})",
            self.kind.describe(),
            self.hex(),
            self.position,
            self.g0,
            self.g1
        )
    }
}
