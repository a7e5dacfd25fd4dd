#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marc8-bridge: MARC-8 to Unicode
//!
//! Decodes MARC-8, the ISO 2022 based character encoding of legacy MARC
//! bibliographic records, into Unicode text.
//!
//! ## Quick Start
//!
//! ```
//! use marc8_bridge::decode_marc8;
//!
//! // "Dvořák": caron (0xE9) precedes 'r' in MARC-8, acute (0xE2) precedes 'a'
//! let text = decode_marc8(b"Dvo\xE9r\xE2ak");
//! assert_eq!(text, "Dvor\u{30C}a\u{301}k");
//! ```
//!
//! ### Switching character sets
//!
//! ```
//! use marc8_bridge::decode_marc8;
//!
//! // ESC ( N selects Basic Cyrillic into G0, ESC ( B restores ASCII
//! let text = decode_marc8(b"\x1B(NKNIGA\x1B(B 1");
//! assert_eq!(text, "\u{43A}\u{43D}\u{438}\u{433}\u{430} 1");
//! ```
//!
//! ### Diagnostics
//!
//! ```
//! use marc8_bridge::{DecoderConfig, Marc8Decoder};
//!
//! let mut decoder = Marc8Decoder::with_config(DecoderConfig::default().with_diagnostics(true));
//! assert_eq!(decoder.decode(b"ok\x7F"), "ok");
//! assert_eq!(decoder.diagnostics()[0].position, 2);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`]: The MARC-8 decoder (`Marc8Decoder`, `decode_with_state`)
//! - [`charset`]: Character set identifiers, mappings and tables
//! - [`registry`]: Shared, lazily loaded character set tables
//! - [`state`]: G0/G1 working-set registers
//! - [`escape`]: Escape sequence parsing
//! - [`combining`]: Combining mark reordering
//! - [`diagnostics`]: Non-fatal decoding diagnostics
//! - [`config`]: Decoder configuration
//! - [`encoding`]: Leader-driven MARC-8 / UTF-8 dispatch
//! - [`error`]: Error types and result type

pub mod charset;
pub mod combining;
pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod escape;
mod marc8_tables;
pub mod registry;
pub mod state;

pub use charset::{CharacterSet, CharacterSetId, CodeMapping};
pub use combining::CombiningRun;
pub use config::{DecoderConfig, UnmappedPolicy};
pub use decoder::{decode_marc8, decode_with_state, Decoded, Marc8Decoder};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use encoding::{decode_bytes, MarcEncoding};
pub use error::{MarcError, Result};
pub use escape::{EscapeSequence, ESC};
pub use registry::CharacterSetRegistry;
pub use state::{Register, WorkingSetState};
