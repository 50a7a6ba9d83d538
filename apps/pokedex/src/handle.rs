//! # Catalog Handle
//!
//! [`Pokedex`] owns one [`CatalogState`] and the repository that feeds it.
//! It is the async face of the state machine:
//!
//! - `refresh` is the only operation that awaits (the repository fetch)
//! - `state`, `set_search_query`, `lookup` and `resolve_chain` are
//!   synchronous and never block on I/O
//! - every change of the presentation state is published on a
//!   `tokio::sync::watch` channel for consumers that prefer to be notified
//!
//! The handle is `Clone`; clones share the same state.

use crate::repository::Repository;
use pokedex_core::{
    CatalogState, Entity, EntityId, PresentationState, RefreshOutcome, RefreshTicket,
    TransportFailure,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Shared catalog session.
pub struct Pokedex<R> {
    repository: Arc<R>,
    /// Never held across an `.await`.
    state: Arc<RwLock<CatalogState>>,
    updates: Arc<watch::Sender<PresentationState>>,
}

impl<R> Clone for Pokedex<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            state: Arc::clone(&self.state),
            updates: Arc::clone(&self.updates),
        }
    }
}

impl<R: Repository> Pokedex<R> {
    /// Create a handle in `Loading` and start the first fetch in the background.
    ///
    /// Outside a Tokio runtime the first fetch cannot be spawned; the handle
    /// then stays `Loading` until [`Pokedex::refresh`] is awaited.
    pub fn new(repository: R) -> Self {
        let pokedex = Self::idle(repository);
        let ticket = pokedex.begin();

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let this = pokedex.clone();
                runtime.spawn(async move { this.finish(ticket).await });
            }
            Err(_) => {
                tracing::warn!("No async runtime available, first fetch deferred until refresh");
            }
        }

        pokedex
    }

    /// Create a handle and await the first fetch before returning.
    pub async fn connect(repository: R) -> Self {
        let pokedex = Self::idle(repository);
        pokedex.refresh().await;
        pokedex
    }

    fn idle(repository: R) -> Self {
        let (updates, _) = watch::channel(PresentationState::Loading);
        Self {
            repository: Arc::new(repository),
            state: Arc::new(RwLock::new(CatalogState::new())),
            updates: Arc::new(updates),
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Enter `Loading`, fetch, and apply the result.
    ///
    /// The fetch runs as its own task, so dropping the returned future does
    /// not abandon it: the result is still applied when it arrives. If
    /// another refresh is started before this one completes, this one's
    /// result is discarded and `RefreshOutcome::Stale` is returned.
    pub async fn refresh(&self) -> RefreshOutcome {
        match self.spawn_refresh().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Refresh task failed: {e}");
                RefreshOutcome::Failed(TransportFailure::new(format!("Refresh task failed: {e}")))
            }
        }
    }

    /// Start a refresh in the background. Must be called within a Tokio runtime.
    ///
    /// The state enters `Loading` before this returns.
    pub fn spawn_refresh(&self) -> JoinHandle<RefreshOutcome> {
        let ticket = self.begin();
        let this = self.clone();
        tokio::spawn(async move { this.finish(ticket).await })
    }

    /// Store a new search query and recompute the visible list if data is shown.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.write();
        if state.set_search_query(query) {
            self.publish(&state);
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Snapshot of the current presentation state.
    pub fn state(&self) -> PresentationState {
        self.read().presentation().clone()
    }

    /// The stored search query.
    pub fn search_query(&self) -> String {
        self.read().search_query().to_string()
    }

    /// Look up an entity in the full collection; the search query is ignored.
    pub fn lookup(&self, id: EntityId) -> Option<Entity> {
        self.read().lookup(id).cloned()
    }

    /// Resolve the evolution chain of `entity` against the full collection.
    pub fn resolve_chain(&self, entity: &Entity) -> Vec<Entity> {
        self.read().resolve_chain(entity)
    }

    /// Number of entities in the authoritative collection.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver that observes every published presentation state.
    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.updates.subscribe()
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn begin(&self) -> RefreshTicket {
        let mut state = self.write();
        let ticket = state.begin_refresh();
        self.publish(&state);
        tracing::debug!(generation = ticket.generation(), "Refresh started");
        ticket
    }

    async fn finish(&self, ticket: RefreshTicket) -> RefreshOutcome {
        let result = self.repository.get_all().await;

        let mut state = self.write();
        let outcome = state.complete_refresh(ticket, result);
        match &outcome {
            RefreshOutcome::Applied { count } => {
                tracing::info!(generation = ticket.generation(), count, "Catalog refreshed");
            }
            RefreshOutcome::Failed(failure) => {
                tracing::warn!(
                    generation = ticket.generation(),
                    "Catalog unavailable: {}",
                    failure
                );
            }
            RefreshOutcome::Rejected(e) => {
                tracing::warn!(generation = ticket.generation(), "Catalog payload rejected: {}", e);
            }
            RefreshOutcome::Stale => {
                tracing::debug!(
                    generation = ticket.generation(),
                    "Superseded refresh result discarded"
                );
            }
        }
        if outcome.is_applied() {
            self.publish(&state);
        }
        outcome
    }

    fn publish(&self, state: &CatalogState) {
        self.updates.send_replace(state.presentation().clone());
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
