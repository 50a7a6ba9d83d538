//! Integration tests for the HTTP remote source.
//!
//! Each test starts an in-process axum server on an ephemeral port and
//! points an `HttpSource` at it; no external network is involved.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use pokedex::{ClientConfig, HttpSource, NetworkRepository, Pokedex, RemoteSource};
use pokedex_core::primitives::MAX_PAYLOAD_BYTES;
use pokedex_core::{Entity, EntityId, PresentationState, encode_entities, fixtures};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// Router answering `GET /data.json` with `body` as JSON.
fn json_route(body: Vec<u8>) -> Router {
    Router::new().route(
        "/data.json",
        get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    )
}

/// Raw HTTP/1.1 server answering every connection with `body` sent in
/// chunks of `chunk_size` bytes and no Content-Length.
async fn serve_chunked(body: Vec<u8>, chunk_size: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    let body = std::sync::Arc::new(body);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = std::sync::Arc::clone(&body);
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let head = "HTTP/1.1 200 OK\r\n\
                            Content-Type: application/json\r\n\
                            Transfer-Encoding: chunked\r\n\r\n";
                if socket.write_all(head.as_bytes()).await.is_err() {
                    return;
                }
                for block in body.chunks(chunk_size) {
                    let frame_head = format!("{:x}\r\n", block.len());
                    if socket.write_all(frame_head.as_bytes()).await.is_err()
                        || socket.write_all(block).await.is_err()
                        || socket.write_all(b"\r\n").await.is_err()
                    {
                        return;
                    }
                }
                let _ = socket.write_all(b"0\r\n\r\n").await;
            });
        }
    });
    format!("http://{addr}")
}

fn source(endpoint: String, timeout_secs: u64) -> HttpSource {
    let config = ClientConfig {
        endpoint,
        timeout_secs,
        ..ClientConfig::default()
    };
    HttpSource::new(&config).expect("http source")
}

// =============================================================================
// SUCCESS
// =============================================================================

#[tokio::test]
async fn fetches_and_decodes_catalog() {
    let body = encode_entities(&fixtures::sample()).expect("encode");
    let base = serve(json_route(body)).await;

    let entities = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect("fetch");

    assert_eq!(entities, fixtures::sample());
}

#[tokio::test]
async fn network_repository_feeds_the_handle() {
    let body = encode_entities(&fixtures::sample()).expect("encode");
    let base = serve(json_route(body)).await;
    let repository = NetworkRepository::new(source(format!("{base}/data.json"), 5));

    let pokedex = Pokedex::connect(repository).await;
    pokedex.set_search_query("saur");

    let visible = pokedex.state();
    assert_eq!(visible.visible().map(<[Entity]>::len), Some(3));
    assert!(pokedex.lookup(EntityId(25)).is_some());
}

// =============================================================================
// TRANSPORT FAILURES
// =============================================================================

#[tokio::test]
async fn non_array_payload_is_transport_failure() {
    let base = serve(json_route(br#"{"id": 1, "name": "Bulbasaur"}"#.to_vec())).await;

    let result = source(format!("{base}/data.json"), 5).fetch_all().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_field_is_transport_failure() {
    let body = br#"[{"id": 1, "name": "Bulbasaur", "description": "", "type": ["grass"],
        "evolutions": {"before": [], "after": []}}]"#;
    let base = serve(json_route(body.to_vec())).await;

    let failure = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect_err("must fail");
    assert!(failure.reason().contains("image_url"));
}

#[tokio::test]
async fn server_error_is_transport_failure() {
    let router = Router::new().route(
        "/data.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(router).await;

    let failure = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect_err("must fail");
    assert!(failure.reason().contains("500"));
}

#[tokio::test]
async fn missing_route_is_transport_failure() {
    let base = serve(Router::new()).await;

    let result = source(format!("{base}/data.json"), 5).fetch_all().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn slow_server_times_out() {
    let router = Router::new().route(
        "/data.json",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "[]"
        }),
    );
    let base = serve(router).await;

    let result = source(format!("{base}/data.json"), 1).fetch_all().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn oversized_payload_is_transport_failure() {
    let base = serve(json_route(vec![b' '; MAX_PAYLOAD_BYTES + 1])).await;

    let failure = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect_err("must fail");
    assert!(failure.reason().contains("exceeds"));
}

#[tokio::test]
async fn oversized_chunked_payload_is_transport_failure() {
    let chunk_size = 1024 * 1024;
    let base = serve_chunked(vec![b' '; MAX_PAYLOAD_BYTES + 2 * chunk_size], chunk_size).await;

    let failure = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect_err("must fail");
    assert!(failure.reason().contains("exceeds"));
}

#[tokio::test]
async fn chunked_payload_within_limit_is_decoded() {
    let body = encode_entities(&fixtures::sample()).expect("encode");
    let base = serve_chunked(body, 64).await;

    let entities = source(format!("{base}/data.json"), 5)
        .fetch_all()
        .await
        .expect("fetch");
    assert_eq!(entities, fixtures::sample());
}

#[tokio::test]
async fn connection_refused_puts_handle_in_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let repository = NetworkRepository::new(source(format!("http://{addr}/data.json"), 2));
    let pokedex = Pokedex::connect(repository).await;

    assert_eq!(pokedex.state(), PresentationState::Error);
    assert!(pokedex.is_empty());
}
