//! Router harness for handler tests, backed by in-memory storage.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hbnb_app::testing::InMemoryStorage;

use crate::router;
use crate::state::AppState;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let storage = InMemoryStorage::new();
        Self {
            router: router::build(AppState::new(&storage)),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn raw(
        &self,
        method: &str,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn with_json(&self, method: &str, uri: &str, json: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, json: Value) -> (StatusCode, Value) {
        self.with_json("POST", uri, &json).await
    }

    pub async fn put(&self, uri: &str, json: Value) -> (StatusCode, Value) {
        self.with_json("PUT", uri, &json).await
    }

    /// Create an object and return its id.
    pub async fn create(&self, uri: &str, json: Value) -> String {
        let (status, body) = self.post(uri, json).await;
        assert_eq!(status, StatusCode::CREATED, "creating via {uri}: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}
