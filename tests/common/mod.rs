//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which starts a `wiremock` server standing in for
//! TMDB and builds a full [`AppContext`] around a real [`TmdbClient`] pointed
//! at it. Requests are driven through the router with `oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reelgate::config::{Config, UpstreamConfig};
use reelgate::server::{create_router, AppContext};
use reelgate::upstream::{CatalogSource, TmdbClient};

pub const TEST_API_KEY: &str = "test-key";

pub struct TestHarness {
    pub server: MockServer,
    pub ctx: AppContext,
}

impl TestHarness {
    /// Harness with the default configuration.
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    /// Harness with a custom configuration. The upstream base URL is always
    /// replaced by the mock server's.
    pub async fn with_config(mut config: Config) -> Self {
        let server = MockServer::start().await;
        config.upstream = UpstreamConfig {
            base_url: server.uri(),
            ..config.upstream
        };

        let source: Arc<dyn CatalogSource> =
            Arc::new(TmdbClient::new(TEST_API_KEY.to_string(), &config.upstream));
        let ctx = AppContext::new(source, config);

        Self { server, ctx }
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone(), None)
    }

    /// Answer `GET {route}` on the mock provider with `body`.
    pub async fn mock_json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET {route}` on the mock provider with a bare status.
    pub async fn mock_status(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mount an empty, successful answer for `core`, videos, images and
    /// recommendations of one title.
    pub async fn mock_title(&self, segment: &str, id: u64, core: Value) {
        self.mock_json(&format!("/{segment}/{id}"), core).await;
        self.mock_json(&format!("/{segment}/{id}/videos"), json!({ "results": [] }))
            .await;
        self.mock_json(
            &format!("/{segment}/{id}/images"),
            json!({ "backdrops": [], "logos": [], "posters": [] }),
        )
        .await;
        self.mock_json(
            &format!("/{segment}/{id}/recommendations"),
            json!({ "results": [] }),
        )
        .await;
    }

    /// Issue a GET through the router.
    pub async fn get(&self, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = self
            .router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        (status, headers, body_to_string(response.into_body()).await)
    }

    /// Issue a GET and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}

/// Helper to get response body as string
pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A page of `count` ranked results with posters, ids starting at `first_id`.
pub fn page(first_id: u64, count: u64) -> Value {
    let results: Vec<Value> = (first_id..first_id + count)
        .map(|id| json!({ "id": id, "title": format!("Title {id}"), "poster_path": format!("/p{id}.jpg") }))
        .collect();
    json!({ "page": 1, "results": results })
}
