//! Character set registry.
//!
//! The registry hands out shared, read-only [`CharacterSet`] tables. The small
//! Latin and special-purpose sets are built when the registry is created; the
//! larger script tables (Hebrew, Cyrillic, Arabic, Greek, EACC) are built the
//! first time they are requested and cached from then on. A lazily loaded set
//! is indistinguishable from an eagerly loaded one once resolved.
//!
//! Most callers use the process-wide registry from
//! [`CharacterSetRegistry::global`].

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::charset::{CharacterSet, CharacterSetId};
use crate::error::Result;
use crate::marc8_tables;

lazy_static! {
    static ref GLOBAL_REGISTRY: CharacterSetRegistry = CharacterSetRegistry::new();
    static ref CONTROL_SET: Arc<CharacterSet> =
        Arc::new(marc8_tables::build(CharacterSetId::Controls));
}

/// The process-wide control character table.
///
/// Consulted by the decoder only after both working sets miss.
#[must_use]
pub fn control_set() -> &'static Arc<CharacterSet> {
    &CONTROL_SET
}

/// Resolves character set identifiers to shared tables.
#[derive(Debug)]
pub struct CharacterSetRegistry {
    loaded: RwLock<IndexMap<CharacterSetId, Arc<CharacterSet>>>,
}

impl Default for CharacterSetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterSetRegistry {
    /// Create a registry with the built-in sets already loaded.
    #[must_use]
    pub fn new() -> Self {
        let loaded = CharacterSetId::ALL
            .into_iter()
            .filter(|id| id.is_builtin())
            .map(|id| (id, Self::load(id)))
            .collect();
        CharacterSetRegistry {
            loaded: RwLock::new(loaded),
        }
    }

    /// The shared process-wide registry.
    #[must_use]
    pub fn global() -> &'static CharacterSetRegistry {
        &GLOBAL_REGISTRY
    }

    fn load(id: CharacterSetId) -> Arc<CharacterSet> {
        if id == CharacterSetId::Controls {
            return Arc::clone(control_set());
        }
        Arc::new(marc8_tables::build(id))
    }

    /// Get the table for a set, loading it on first use.
    #[must_use]
    pub fn get(&self, id: CharacterSetId) -> Arc<CharacterSet> {
        if let Some(set) = self
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Arc::clone(set);
        }

        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        let set = loaded.entry(id).or_insert_with(|| {
            tracing::debug!(charset = id.name(), "loading MARC-8 character set");
            Self::load(id)
        });
        Arc::clone(set)
    }

    /// Resolve an identifier byte (escape sequence final byte) to its table.
    ///
    /// # Errors
    ///
    /// Returns `MarcError::UnknownCharset` if the byte names no MARC-8 set.
    pub fn resolve(&self, identifier: u8) -> Result<Arc<CharacterSet>> {
        let id = CharacterSetId::try_from(identifier)?;
        Ok(self.get(id))
    }

    /// Whether the table for `id` has been built.
    #[must_use]
    pub fn is_loaded(&self, id: CharacterSetId) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }
}
