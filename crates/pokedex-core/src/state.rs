//! # State Module
//!
//! The catalog state machine: authoritative collection, search query and
//! the presentation state derived from both.
//!
//! ## States
//!
//! ```text
//!            begin_refresh                 complete_refresh(Ok)
//!   ┌─────────┐ ───────────► ┌─────────┐ ─────────────────────► ┌────────────────┐
//!   │ (any)   │              │ Loading │                        │ Success(list)  │
//!   └─────────┘              └─────────┘ ─────────────────────► └────────────────┘
//!                                          complete_refresh(Err)  ┌───────┐
//!                                          ─────────────────────► │ Error │
//!                                                                 └───────┘
//! ```
//!
//! This type is sans-IO. The owner calls [`CatalogState::begin_refresh`],
//! performs the fetch, then hands the result to
//! [`CatalogState::complete_refresh`] with the ticket it was given.
//!
//! ## Overlapping refreshes
//!
//! Every `begin_refresh` takes a new generation. Only the ticket of the most
//! recently started refresh may write; a result carrying an older ticket is
//! reported as [`RefreshOutcome::Stale`] and leaves the state untouched.

use crate::query::{SearchQuery, filter};
use crate::{Catalog, Entity, EntityId, PokedexError, TransportFailure, evolution};
use serde::Serialize;

// =============================================================================
// PRESENTATION STATE
// =============================================================================

/// What consumers render. Exactly one variant holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "entities", rename_all = "lowercase")]
pub enum PresentationState {
    /// No data yet, or a refresh is in flight.
    #[default]
    Loading,
    /// The authoritative collection filtered by the current query.
    Success(Vec<Entity>),
    /// The last fetch failed; no stale data is kept.
    Error,
}

impl PresentationState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The visible list, if the state is `Success`.
    #[must_use]
    pub fn visible(&self) -> Option<&[Entity]> {
        match self {
            Self::Success(list) => Some(list),
            Self::Loading | Self::Error => None,
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error => "error",
        }
    }
}

// =============================================================================
// REFRESH BOOKKEEPING
// =============================================================================

/// Proof that a refresh was started; carries its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// The generation this ticket was issued for.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// What `complete_refresh` did with a fetch result.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The collection was replaced and the state is `Success`.
    Applied { count: usize },
    /// The fetch failed; the collection was cleared and the state is `Error`.
    Failed(TransportFailure),
    /// The fetch succeeded but the payload was rejected on ingest; handled
    /// exactly like `Failed`.
    Rejected(PokedexError),
    /// A newer refresh was started after this one; the result was discarded.
    Stale,
}

impl RefreshOutcome {
    /// Whether the result changed the state.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

// =============================================================================
// CATALOG STATE
// =============================================================================

/// The single owned state object of a catalog session.
///
/// All mutation goes through `begin_refresh`, `complete_refresh` and
/// `set_search_query`. A fresh instance is `Loading` with an empty catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Catalog,
    query: SearchQuery,
    presentation: PresentationState,
    /// Last generation handed out.
    generation: u64,
    /// Generation allowed to complete, if a refresh is outstanding.
    pending: Option<u64>,
}

impl CatalogState {
    /// Create a new state in `Loading`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh: enter `Loading` and issue the ticket for its result.
    ///
    /// The collection is kept until the result arrives, so `lookup` keeps
    /// answering during the refresh.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.presentation = PresentationState::Loading;
        RefreshTicket(self.generation)
    }

    /// Apply the result of the refresh identified by `ticket`.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Entity>, TransportFailure>,
    ) -> RefreshOutcome {
        if self.pending != Some(ticket.0) {
            return RefreshOutcome::Stale;
        }
        self.pending = None;

        let entities = match result {
            Ok(entities) => entities,
            Err(failure) => {
                self.discard();
                return RefreshOutcome::Failed(failure);
            }
        };

        match Catalog::from_entities(entities) {
            Ok(catalog) => {
                let count = catalog.len();
                self.catalog = catalog;
                self.recompute();
                RefreshOutcome::Applied { count }
            }
            Err(e) => {
                self.discard();
                RefreshOutcome::Rejected(e)
            }
        }
    }

    /// Store a new search query.
    ///
    /// The visible list is recomputed from the current collection only when
    /// the state is `Success`; in `Loading` or `Error` the query waits for the
    /// next successful fetch. Returns whether the visible list was recomputed.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        self.query = SearchQuery::new(query);
        if matches!(self.presentation, PresentationState::Success(_)) {
            self.recompute();
            return true;
        }
        false
    }

    /// Look up an entity in the full collection, ignoring the search query.
    #[must_use]
    pub fn lookup(&self, id: EntityId) -> Option<&Entity> {
        self.catalog.get(id)
    }

    /// Resolve the evolution chain of `entity` against the full collection.
    #[must_use]
    pub fn resolve_chain(&self, entity: &Entity) -> Vec<Entity> {
        evolution::resolve_chain(&self.catalog, entity)
    }

    #[must_use]
    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    /// The stored search query, verbatim.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.query.as_str()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Whether a refresh has been started and not yet completed.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.pending.is_some()
    }

    fn recompute(&mut self) {
        let visible = filter(self.catalog.entities(), &self.query);
        self.presentation = PresentationState::Success(visible);
    }

    fn discard(&mut self) {
        self.catalog = Catalog::new();
        self.presentation = PresentationState::Error;
    }
}

// =============================================================================
// TESTS
// =============================================================================
