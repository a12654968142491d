//! REST, push relay and `/ws` against a live server on an ephemeral port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use nf_app::{ArticleService, SendPushNotification};
use nf_core::notification::PushMessage;
use nf_core::ports::{PushError, PushSenderPort};
use nf_infra::{init_db_pool, DieselArticleRepository, SystemClock};
use nf_server::{serve_with_shutdown, AppState, EventHub};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;

// ============================================================================
// Harness
// ============================================================================

#[derive(Default)]
struct MockPushSender {
    sent: Mutex<Vec<PushMessage>>,
    should_fail: bool,
}

#[async_trait]
impl PushSenderPort for MockPushSender {
    async fn send(&self, message: &PushMessage) -> Result<Value, PushError> {
        if self.should_fail {
            return Err(PushError::Rejected {
                status: 503,
                body: "unavailable".into(),
            });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(json!({"data": {"status": "ok"}}))
    }
}

struct TestServer {
    _dir: TempDir,
    addr: SocketAddr,
    push: Arc<MockPushSender>,
    _shutdown: oneshot::Sender<()>,
    client: reqwest::Client,
}

impl TestServer {
    async fn start(push: MockPushSender) -> Self {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("articles.db");
        let pool = init_db_pool(db_path.to_str().unwrap()).unwrap();

        let hub = EventHub::new();
        let push = Arc::new(push);
        let state = AppState {
            articles: Arc::new(ArticleService::new(
                Arc::new(DieselArticleRepository::new(pool)),
                Arc::new(hub.clone()),
                Arc::new(SystemClock),
            )),
            push: Arc::new(SendPushNotification::new(push.clone())),
            hub,
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, signal) = oneshot::channel::<()>();
        tokio::spawn(serve_with_shutdown(listener, state, async {
            let _ = signal.await;
        }));

        Self {
            _dir: dir,
            addr,
            push,
            _shutdown: shutdown,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn create(&self, heading: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/articles"))
            .json(&json!({
                "imageLink": "https://cdn.example.com/a.png",
                "heading": heading,
                "text": "Some article text",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }
}

async fn next_json<S>(ws: &mut S) -> Value
where
    S: futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        let message = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for frame")
            .expect("stream ended")
            .expect("read failed");
        if let Message::Text(text) = message {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

// ============================================================================
// REST
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(MockPushSender::default()).await;

    let body: Value = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({"status": "API is running"}));
}

#[tokio::test]
async fn test_create_get_and_list_newest_first() {
    let server = TestServer::start(MockPushSender::default()).await;
    let first = server.create("First").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = server.create("Second").await;

    assert_eq!(first["likes"], 0);
    assert!(first["_id"].as_str().is_some_and(|id| !id.is_empty()));

    let listed: Vec<Value> = server
        .client
        .get(server.url("/api/articles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let headings: Vec<_> = listed.iter().map(|a| a["heading"].as_str().unwrap()).collect();
    assert_eq!(headings, vec!["Second", "First"]);

    let id = second["_id"].as_str().unwrap();
    let fetched: Value = server
        .client
        .get(server.url(&format!("/api/articles/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn test_search_requires_query_and_matches_case_insensitively() {
    let server = TestServer::start(MockPushSender::default()).await;
    for heading in ["Cats", "Dogs", "Catfish"] {
        server.create(heading).await;
    }

    let missing = server
        .client
        .get(server.url("/api/articles/search"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["code"], "MISSING_QUERY");

    let found: Vec<Value> = server
        .client
        .get(server.url("/api/articles/search?q=cat"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let headings: Vec<_> = found.iter().map(|a| a["heading"].as_str().unwrap()).collect();
    assert_eq!(headings, vec!["Cats", "Catfish"]);
}

#[tokio::test]
async fn test_validation_and_not_found_errors() {
    let server = TestServer::start(MockPushSender::default()).await;

    let invalid = server
        .client
        .post(server.url("/api/articles"))
        .json(&json!({"imageLink": "ftp://nope", "heading": "H", "text": "T"}))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let body: Value = invalid.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let malformed = server
        .client
        .post(server.url("/api/articles"))
        .header("content-type", "application/json")
        .body("{")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let missing = server
        .client
        .get(server.url("/api/articles/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");

    let update_missing = server
        .client
        .put(server.url("/api/articles/unknown"))
        .json(&json!({"imageLink": "https://x.com/a.png", "heading": "H", "text": "T"}))
        .send()
        .await
        .unwrap();
    assert_eq!(update_missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let server = TestServer::start(MockPushSender::default()).await;
    let created = server.create("Doomed").await;
    let url = server.url(&format!("/api/articles/{}", created["_id"].as_str().unwrap()));

    for _ in 0..2 {
        let response = server.client.delete(&url).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
    let response = server.client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Push relay
// ============================================================================

#[tokio::test]
async fn test_push_relay_validates_and_forwards() {
    let server = TestServer::start(MockPushSender::default()).await;
    let url = server.url("/api/send-notification");

    let missing = server
        .client
        .post(&url)
        .json(&json!({"token": "ExponentPushToken[x]", "title": "t"}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["message"], "Missing required fields");

    let bad_token = server
        .client
        .post(&url)
        .json(&json!({"token": "abc", "title": "t", "body": "b"}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_token.status(), StatusCode::BAD_REQUEST);
    assert!(server.push.sent.lock().unwrap().is_empty());

    let ok = server
        .client
        .post(&url)
        .json(&json!({
            "token": "ExponentPushToken[x]",
            "title": "Breaking",
            "body": "News",
            "data": {"articleId": "1"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    let body: Value = ok.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "data": {"data": {"status": "ok"}}}));

    let sent = server.push.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ExponentPushToken[x]");
    assert_eq!(sent[0].priority, "high");
}

#[tokio::test]
async fn test_push_relay_upstream_failure_is_500() {
    let server = TestServer::start(MockPushSender {
        should_fail: true,
        ..Default::default()
    })
    .await;

    let response = server
        .client
        .post(server.url("/api/send-notification"))
        .json(&json!({"token": "ExponentPushToken[x]", "title": "t", "body": "b"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "PUSH_FAILED");
}

// ============================================================================
// Realtime channel
// ============================================================================

#[tokio::test]
async fn test_ws_greets_then_broadcasts_mutations() {
    let server = TestServer::start(MockPushSender::default()).await;
    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", server.addr))
        .await
        .unwrap();

    let greeting = next_json(&mut ws).await;
    assert_eq!(
        greeting,
        json!({"event": "connected", "data": {"message": "Connected successfully"}})
    );

    let created = server.create("Live").await;
    let id = created["_id"].as_str().unwrap().to_string();
    let frame = next_json(&mut ws).await;
    assert_eq!(frame["event"], "articleCreated");
    assert_eq!(frame["data"]["_id"], id.as_str());
    assert_eq!(frame["data"]["heading"], "Live");

    server
        .client
        .put(server.url(&format!("/api/articles/{id}")))
        .json(&json!({
            "imageLink": "https://cdn.example.com/b.png",
            "heading": "Live update",
            "text": "Changed"
        }))
        .send()
        .await
        .unwrap();
    let frame = next_json(&mut ws).await;
    assert_eq!(frame["event"], "articleUpdated");
    assert_eq!(frame["data"]["heading"], "Live update");

    server
        .client
        .delete(server.url(&format!("/api/articles/{id}")))
        .send()
        .await
        .unwrap();
    let frame = next_json(&mut ws).await;
    assert_eq!(frame, json!({"event": "articleDeleted", "data": id}));
}
