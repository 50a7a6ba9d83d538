//! # Pokedex client
//!
//! Network and runtime side of the Pokedex: fetches the catalog, owns the
//! [`pokedex_core::CatalogState`] behind an async handle, and exposes the
//! CLI used by the `pokedex` binary.
//!
//! ```text
//! RemoteSource ──► Repository ──► Pokedex (CatalogState) ──► consumers
//!   (HTTP)          (seam)          (refresh / search / lookup / chain)
//! ```

pub mod cli;
pub mod config;
pub mod handle;
pub mod remote;
pub mod repository;

pub use config::ClientConfig;
pub use handle::Pokedex;
pub use remote::{FixtureSource, HttpSource, RemoteSource};
pub use repository::{FixtureRepository, NetworkRepository, Repository};
