//! # Evolution Module
//!
//! Resolution of an entity's evolution chain against the catalog.
//!
//! The chain is the entity's predecessor ids followed by its successor ids,
//! each list in its original order, resolved one by one:
//! - Ids missing from the catalog are skipped
//! - No deduplication: an id listed twice resolves twice
//! - No cycle detection: references are followed exactly one hop

use crate::{Catalog, Entity};

/// Resolve the evolution chain of `entity` against `catalog`.
///
/// The entity itself does not need to be part of the catalog.
#[must_use]
pub fn resolve_chain(catalog: &Catalog, entity: &Entity) -> Vec<Entity> {
    entity
        .evolution_ids()
        .filter_map(|id| catalog.get(id))
        .cloned()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
