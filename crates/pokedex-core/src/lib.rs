//! # pokedex-core
//!
//! The client-side catalog engine for the Pokedex - THE LOGIC.
//!
//! This crate holds everything that has real invariants: the entity model,
//! the wire format, the authoritative collection, the search filter, the
//! evolution-chain resolver and the Loading / Success / Error state machine.
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - The state machine is sans-IO: the app layer performs the fetch and
//!   hands the result to [`CatalogState::complete_refresh`]
//! - Filter, lookup and chain resolution are synchronous and side-effect-free

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod evolution;
pub mod fixtures;
pub mod formats;
pub mod ingestor;
pub mod primitives;
pub mod query;
pub mod state;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Entity, EntityId, PokedexError, Relationships, TransportFailure};

// =============================================================================
// RE-EXPORTS: Catalog Engine
// =============================================================================

pub use catalog::Catalog;
pub use evolution::resolve_chain;
pub use ingestor::Ingestor;
pub use query::{SearchQuery, filter};
pub use state::{CatalogState, PresentationState, RefreshOutcome, RefreshTicket};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{decode_entities, encode_entities};
