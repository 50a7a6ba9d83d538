//! # Catalog Module
//!
//! The authoritative collection of entities.
//!
//! A `Catalog` keeps the entities in the order the source returned them and
//! an id index next to them. It is built once per successful fetch and is
//! never mutated afterwards; a refresh builds a new one.

use crate::ingestor::Ingestor;
use crate::{Entity, EntityId, PokedexError};
use std::collections::BTreeMap;

/// Ordered, id-indexed entity collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Entities in source order.
    entities: Vec<Entity>,
    /// Entity id -> position in `entities`.
    index: BTreeMap<EntityId, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a fetched collection.
    ///
    /// The collection is validated by the [`Ingestor`] first; a duplicate id
    /// rejects the whole collection.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, PokedexError> {
        Ingestor::validate(&entities)?;

        let index = entities
            .iter()
            .enumerate()
            .map(|(position, entity)| (entity.id, position))
            .collect();

        Ok(Self { entities, index })
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).and_then(|&pos| self.entities.get(pos))
    }

    /// Whether an entity with this id is present.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// All entities in source order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
