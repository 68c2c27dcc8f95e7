#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use snaplink::api::routes::routes;
use snaplink::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_PEER: &str = "127.0.0.1:12345";

pub async fn create_test_url(pool: &PgPool, original_url: &str, short_code: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (original_url, short_code) VALUES ($1, $2) RETURNING id")
        .bind(original_url)
        .bind(short_code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_click(pool: &PgPool, url_id: i64, referrer: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO clicks (url_id, referrer) VALUES ($1, $2) RETURNING id")
        .bind(url_id)
        .bind(referrer)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_clicks(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), false)
}

/// Test server with every public route and a fixed peer address.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = routes()
        .layer(MockConnectInfoLayer)
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}

/// Injects `ConnectInfo` the way `into_make_service_with_connect_info` does.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = TEST_PEER.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
