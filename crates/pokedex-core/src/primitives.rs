//! # Primitives
//!
//! Hardcoded constants for the Pokedex client.
//!
//! These are compiled into the binary; the app layer may override the
//! endpoint and timeout through configuration, never the limits.

/// Default catalog endpoint: a static JSON array of every entity.
pub const DEFAULT_ENDPOINT: &str =
    "https://raw.githubusercontent.com/cacardt/IoT_Pokedex/main/data2.json";

/// Default request timeout for one catalog fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum accepted payload size (16 MB).
///
/// A response larger than this is rejected before decoding.
pub const MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Maximum number of entities accepted from one fetch.
///
/// Payloads holding more entities are rejected as malformed.
pub const MAX_ENTITY_COUNT: usize = 100_000;
