//! # Repository
//!
//! The seam the catalog handle depends on. The network implementation
//! delegates to a [`RemoteSource`] verbatim: no transformation, no caching,
//! no retry. The fixture implementation returns a fixed collection so tests
//! and the `--fixture` CLI mode can run without a network.

use crate::remote::RemoteSource;
use pokedex_core::{Entity, TransportFailure, fixtures};

/// Source of the full entity collection for the catalog handle.
pub trait Repository: Send + Sync + 'static {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Entity>, TransportFailure>> + Send;
}

/// Repository over a remote source.
#[derive(Debug, Clone)]
pub struct NetworkRepository<S> {
    source: S,
}

impl<S: RemoteSource> NetworkRepository<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: RemoteSource> Repository for NetworkRepository<S> {
    async fn get_all(&self) -> Result<Vec<Entity>, TransportFailure> {
        self.source.fetch_all().await
    }
}

/// Repository returning a fixed, deterministic collection.
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    entities: Vec<Entity>,
}

impl FixtureRepository {
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::new(fixtures::sample())
    }
}

impl Repository for FixtureRepository {
    async fn get_all(&self) -> Result<Vec<Entity>, TransportFailure> {
        Ok(self.entities.clone())
    }
}
