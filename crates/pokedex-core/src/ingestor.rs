//! # Ingestor Module
//!
//! Validation of a fetched collection before it becomes authoritative.
//!
//! - Reject the whole collection on any violation
//! - Never repair, merge or drop individual entities
//! - Dangling evolution references are NOT a violation

use crate::{Entity, PokedexError};
use std::collections::BTreeSet;

/// The Ingestor checks a fetched collection before the catalog adopts it.
pub struct Ingestor;

impl Ingestor {
    /// Validate a fetched collection.
    ///
    /// A collection is valid if no two entities share an id.
    ///
    /// Returns `PokedexError::DuplicateId` with the first repeated id otherwise.
    pub fn validate(entities: &[Entity]) -> Result<(), PokedexError> {
        let mut seen = BTreeSet::new();
        for entity in entities {
            if !seen.insert(entity.id) {
                return Err(PokedexError::DuplicateId(entity.id));
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
