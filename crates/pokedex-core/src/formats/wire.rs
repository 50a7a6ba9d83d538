//! # Wire Format
//!
//! JSON decoding of the catalog payload.
//!
//! The remote endpoint returns one JSON array of entity objects (see
//! [`Entity`] for the field mapping). Decoding is all-or-nothing:
//! - A top-level value that is not an array is rejected
//! - Any object missing a required field rejects the whole payload
//! - Unknown extra fields are ignored
//!
//! Every rejection is a [`TransportFailure`]; the caller cannot tell a bad
//! payload from a dropped connection, and does not need to.

use crate::primitives::{MAX_ENTITY_COUNT, MAX_PAYLOAD_BYTES};
use crate::{Entity, PokedexError, TransportFailure};

/// Decode a full catalog payload.
///
/// Size is checked BEFORE parsing.
pub fn decode_entities(bytes: &[u8]) -> Result<Vec<Entity>, TransportFailure> {
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(TransportFailure::new(format!(
            "Payload size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_PAYLOAD_BYTES
        )));
    }

    let entities: Vec<Entity> = serde_json::from_slice(bytes)
        .map_err(|e| TransportFailure::new(format!("Malformed catalog payload: {e}")))?;

    if entities.len() > MAX_ENTITY_COUNT {
        return Err(TransportFailure::new(format!(
            "Payload holds {} entities, maximum is {}",
            entities.len(),
            MAX_ENTITY_COUNT
        )));
    }

    Ok(entities)
}

/// Encode entities in the wire format.
///
/// This is a pure transformation - no I/O.
pub fn encode_entities(entities: &[Entity]) -> Result<Vec<u8>, PokedexError> {
    serde_json::to_vec(entities).map_err(|e| PokedexError::Serialization(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
