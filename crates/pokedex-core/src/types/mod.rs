//! # Core Type Definitions
//!
//! This module contains the data shapes shared by every layer:
//! - Entity identifiers (`EntityId`)
//! - The catalog record (`Entity`) and its evolution references (`Relationships`)
//! - Error types (`TransportFailure`, `PokedexError`)
//!
//! The serde attributes here ARE the wire format: field names on the wire
//! (`image_url`, `type`, `evolutions.before/after`) are mapped onto the
//! Rust names through `rename`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of an entity within a fetch result.
///
/// Used as the lookup key and as the target of evolution references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// RELATIONSHIPS
// =============================================================================

/// Evolution references of an entity.
///
/// Both lists hold ids of other entities in the same collection. Ids may be
/// missing from the collection and may point back at the entity itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Relationships {
    /// Entities this one evolves from.
    #[serde(rename = "before")]
    pub predecessors: Vec<EntityId>,
    /// Entities this one evolves into.
    #[serde(rename = "after")]
    pub successors: Vec<EntityId>,
}

// =============================================================================
// ENTITY
// =============================================================================

/// A single catalog record (a creature).
///
/// Entities are immutable once decoded; the catalog replaces them wholesale
/// on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Remote image location. Never dereferenced by the core.
    pub image_url: String,
    /// Ordered type tags; the first one is the primary type.
    #[serde(rename = "type")]
    pub types: Vec<String>,
    #[serde(rename = "evolutions")]
    pub relationships: Relationships,
}

impl Entity {
    /// Create an entity with no description, image or relationships.
    ///
    /// Use the `with_*` builders to fill in the rest.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            types: Vec::new(),
            relationships: Relationships::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_predecessors(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.relationships.predecessors = ids.into_iter().map(EntityId).collect();
        self
    }

    #[must_use]
    pub fn with_successors(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.relationships.successors = ids.into_iter().map(EntityId).collect();
        self
    }

    /// The first type tag, if any.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Predecessor ids followed by successor ids, each in original order.
    pub fn evolution_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.relationships
            .predecessors
            .iter()
            .chain(self.relationships.successors.iter())
            .copied()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// The single failure kind of the fetch boundary.
///
/// Covers network errors, timeouts, non-2xx responses and malformed
/// payloads alike. Callers must not branch on `reason`; it exists for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transport failure: {reason}")]
pub struct TransportFailure {
    reason: String,
}

impl TransportFailure {
    /// Create a transport failure with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason recorded when the failure was raised.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors that can occur in the Pokedex system.
///
/// - Fetch failures are always `Transport`
/// - A lookup miss is `NotFound` only where a caller asked for it to be an error
/// - The CORE never panics; all errors are recoverable
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The catalog could not be fetched.
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    /// A fetched payload contained the same id more than once.
    #[error("Duplicate entity id in payload: {0}")]
    DuplicateId(EntityId),

    /// No entity with this id exists in the catalog.
    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
