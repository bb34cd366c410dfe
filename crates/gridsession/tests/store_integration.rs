//! Integration tests for the session store against a mock cache server.

use chrono::{Duration as ChronoDuration, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gridsession::{codec, Error, SessionStore, StoreConfig};

/// Standard success envelope the cache server wraps every response in.
fn ok_envelope(response: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "successStatus": 0,
        "response": response,
    }))
}

/// Mount the `getOrCreate` handshake and connect a store to the mock server.
async fn connected_store(server: &MockServer) -> SessionStore {
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "getOrCreate"))
        .and(query_param("cacheName", "session.cache"))
        .and(query_param("templateName", "REPLICATED"))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(server)
        .await;

    SessionStore::connect(StoreConfig::new().with_base_url(server.uri()))
        .await
        .unwrap()
}

#[tokio::test]
async fn connect_issues_one_get_or_create() {
    let server = MockServer::start().await;
    let _store = connected_store(&server).await;

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn connect_failure_surfaces_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = SessionStore::connect(StoreConfig::new().with_base_url(server.uri())).await;
    assert!(matches!(result, Err(Error::Client(err)) if err.is_protocol()));
}

#[tokio::test]
async fn create_session_applies_configured_interval_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "getOrCreate"))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let store = SessionStore::connect(
        StoreConfig::new()
            .with_base_url(server.uri())
            .with_default_max_inactive_interval(60),
    )
    .await
    .unwrap();

    let session = store.create_session();
    assert_eq!(session.max_inactive_interval(), 60);
    assert!(!session.is_expired());

    // Only the connect handshake hit the wire.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_issues_put_keyed_by_session_id() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "put"))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let session = store.create_session();
    store.save(&session).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let put = requests.last().unwrap();
    let expected_val = codec::to_wire_text(&codec::encode(&session).unwrap());
    assert_eq!(
        put.url.query(),
        Some(
            format!(
                "cmd=put&cacheName=session.cache&key={}&val={}",
                session.id(),
                expected_val
            )
            .as_str()
        )
    );
}

#[tokio::test]
async fn save_then_load_round_trips_the_session() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    let mut session = store.create_session();
    session.set_attribute("user", "alice").unwrap();
    session
        .set_attribute("cart", json!({"items": ["a-1", "b-2"], "total": 42}))
        .unwrap();

    let stored = codec::to_wire_text(&codec::encode(&session).unwrap());

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "put"))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .and(query_param("key", session.id()))
        .respond_with(ok_envelope(json!(stored)))
        .expect(1)
        .mount(&server)
        .await;

    store.save(&session).await.unwrap();
    let loaded = store.get_session(session.id()).await.unwrap().unwrap();
    assert_eq!(loaded, session);
}

#[tokio::test]
async fn expired_session_is_deleted_on_read() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    let mut session = store.create_session();
    session.set_max_inactive_interval(1);
    session.set_last_accessed_time(Utc::now() - ChronoDuration::seconds(2));
    assert!(session.is_expired());

    let stored = codec::to_wire_text(&codec::encode(&session).unwrap());

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "put"))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .respond_with(ok_envelope(json!(stored)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "rmv"))
        .and(query_param("key", session.id()))
        .respond_with(ok_envelope(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    store.save(&session).await.unwrap();
    assert!(store.get_session(session.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn absent_session_reads_as_none_without_delete() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .respond_with(ok_envelope(json!(null)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "rmv"))
        .respond_with(ok_envelope(json!(true)))
        .expect(0)
        .mount(&server)
        .await;

    assert!(store.get_session("nonexistent").await.unwrap().is_none());
}

#[tokio::test]
async fn null_literal_value_reads_as_none() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .respond_with(ok_envelope(json!("null")))
        .mount(&server)
        .await;

    assert!(store.get_session("nonexistent").await.unwrap().is_none());
}

#[tokio::test]
async fn undecodable_value_reads_as_none() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    // Not hex at all.
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .and(query_param("key", "bad-hex"))
        .respond_with(ok_envelope(json!("zz-not-hex")))
        .mount(&server)
        .await;
    // Valid hex, but not a serialized session.
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .and(query_param("key", "bad-payload"))
        .respond_with(ok_envelope(json!(codec::to_wire_text(b"not a session"))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "rmv"))
        .respond_with(ok_envelope(json!(true)))
        .expect(0)
        .mount(&server)
        .await;

    assert!(store.get_session("bad-hex").await.unwrap().is_none());
    assert!(store.get_session("bad-payload").await.unwrap().is_none());
}

#[tokio::test]
async fn read_failure_is_an_error_not_absent() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "get"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = store.get_session("abc123").await;
    assert!(matches!(result, Err(Error::Client(err)) if err.is_protocol()));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let server = MockServer::start().await;
    let store = connected_store(&server).await;

    Mock::given(method("GET"))
        .and(path("/ignite"))
        .and(query_param("cmd", "rmv"))
        .and(query_param("key", "abc123"))
        .respond_with(ok_envelope(json!(true)))
        .expect(2)
        .mount(&server)
        .await;

    store.delete("abc123").await.unwrap();
    store.delete("abc123").await.unwrap();
}
