//! # Remote Source
//!
//! The one network call of the system: GET the catalog endpoint and decode
//! the JSON array it returns.
//!
//! Every way this can go wrong (connection refused, timeout, non-2xx status,
//! oversized or malformed body) surfaces as the same [`TransportFailure`].
//! Nothing is cached here; each call is a fresh request.

use crate::config::ClientConfig;
use pokedex_core::primitives::MAX_PAYLOAD_BYTES;
use pokedex_core::{Entity, PokedexError, TransportFailure, decode_entities, fixtures};

/// Something that can fetch the full entity collection.
///
/// Implementations must be idempotent: repeated calls return the current
/// snapshot of the source.
pub trait RemoteSource: Send + Sync + 'static {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Entity>, TransportFailure>> + Send;
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

/// Remote source backed by a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    /// Build an HTTP source from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, PokedexError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PokedexError::Config(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The URL this source fetches.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteSource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<Entity>, TransportFailure> {
        let mut resp = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| TransportFailure::new(format!("Cannot fetch {}: {e}", self.endpoint)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportFailure::new(format!(
                "{} returned status {status}",
                self.endpoint
            )));
        }

        let declared = resp.content_length().unwrap_or(0);
        if declared > MAX_PAYLOAD_BYTES as u64 {
            return Err(TransportFailure::new(format!(
                "Declared payload size {declared} bytes exceeds maximum allowed {MAX_PAYLOAD_BYTES} bytes"
            )));
        }

        // Content-Length is optional; the cap is also checked per chunk.
        let mut body = Vec::new();
        while let Some(chunk) = resp
            .chunk()
            .await
            .map_err(|e| TransportFailure::new(format!("Cannot read response body: {e}")))?
        {
            if body.len() + chunk.len() > MAX_PAYLOAD_BYTES {
                return Err(TransportFailure::new(format!(
                    "Payload exceeds maximum allowed {MAX_PAYLOAD_BYTES} bytes"
                )));
            }
            body.extend_from_slice(&chunk);
        }

        let entities = decode_entities(&body)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            entities = entities.len(),
            "Catalog fetched"
        );
        Ok(entities)
    }
}

// =============================================================================
// FIXTURE SOURCE
// =============================================================================

/// Remote source that answers with a fixed collection, no network involved.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    entities: Vec<Entity>,
}

impl FixtureSource {
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new(fixtures::sample())
    }
}

impl RemoteSource for FixtureSource {
    async fn fetch_all(&self) -> Result<Vec<Entity>, TransportFailure> {
        Ok(self.entities.clone())
    }
}
