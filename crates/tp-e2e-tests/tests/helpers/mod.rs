//! Shared test harness for E2E integration tests.
//!
//! Builds the real router around a `FileInsightStore` in a scratch
//! directory, so every request exercises actual file I/O.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use tp_protocol::EngagementLevel;
use tp_server::config::ServerConfig;
use tp_server::routes::build_router;
use tp_server::state::AppState;

/// End-to-end harness: router + scratch directory holding the log.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
    pub dir: TempDir,
}

impl TestHarness {
    /// Harness whose insight log does not exist yet.
    pub fn new() -> Self {
        Self::with_level(EngagementLevel::Full)
    }

    pub fn with_level(level: EngagementLevel) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            insights_path: dir.path().join("team/insights.md"),
            protocol_path: dir.path().join("protocol.md"),
            engagement_level: level,
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        let router = build_router(state.clone());
        Self { state, router, dir }
    }

    /// Harness whose log starts with the given text.
    pub fn with_log(text: &str) -> Self {
        let h = Self::new();
        std::fs::create_dir_all(h.insights_path().parent().unwrap()).unwrap();
        std::fs::write(h.insights_path(), text).unwrap();
        h
    }

    pub fn insights_path(&self) -> PathBuf {
        self.state.config.insights_path.clone()
    }

    pub fn protocol_path(&self) -> PathBuf {
        self.state.config.protocol_path.clone()
    }

    pub fn log_text(&self) -> String {
        std::fs::read_to_string(self.insights_path()).unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        post_with(self.router.clone(), uri, body).await
    }

    /// POST a tool call and return (status, full response body).
    pub async fn call(&self, tool: &str, arguments: Value) -> (StatusCode, Value) {
        self.post(
            "/api/v1/tools/call",
            json!({"tool": tool, "arguments": arguments}),
        )
        .await
    }

    /// Call a tool that must succeed; returns `result.data`.
    pub async fn call_ok(&self, tool: &str, arguments: Value) -> Value {
        let (status, body) = self.call(tool, arguments).await;
        assert_eq!(status, StatusCode::OK, "{tool} failed: {body}");
        assert_eq!(body["result"]["success"], true);
        body["result"]["data"].clone()
    }

    pub async fn log(&self, insight: &str, category: Option<&str>, tags: &[&str]) -> Value {
        let mut args = json!({"insight": insight, "tags": tags});
        if let Some(c) = category {
            args["category"] = json!(c);
        }
        self.call_ok("log_insight", args).await
    }

    pub async fn insights(&self, arguments: Value) -> Value {
        self.call_ok("get_insights", arguments).await
    }

    pub async fn read_resource(&self, uri: &str) -> (StatusCode, Value) {
        self.post("/api/v1/resources/read", json!({"uri": uri})).await
    }
}

/// Render a dated block the way the append path writes it.
pub fn block(date: &str, category: &str, tags: &str, content: &str) -> String {
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{tags}]")
    };
    format!("\n---\n\n*({date})* - **{category}**{tags}\n\n{content}\n")
}

/// A log document: header plus the given blocks.
pub fn document(blocks: &[String]) -> String {
    let mut text = String::from("# Team Insights Log\n");
    for b in blocks {
        text.push_str(b);
    }
    text
}

/// POST JSON to a router (usable from spawned tasks).
pub async fn post_with(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
