//! # Query Module
//!
//! Free-text search over the catalog.
//!
//! - Blank query (empty or whitespace only) matches everything
//! - Otherwise a case-insensitive substring match against the entity name
//! - Stable: results keep catalog order, nothing is re-sorted
//! - No matches is an empty list, not an error

use crate::Entity;

/// A search query as typed by the user.
///
/// The raw text is kept verbatim; the lowercase needle is computed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Create a query from user text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query text exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the query is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Whether an entity passes this query.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        self.is_blank() || entity.name.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Apply a query to a collection, preserving order.
#[must_use]
pub fn filter(entities: &[Entity], query: &SearchQuery) -> Vec<Entity> {
    if query.is_blank() {
        return entities.to_vec();
    }
    entities
        .iter()
        .filter(|entity| query.matches(entity))
        .cloned()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
