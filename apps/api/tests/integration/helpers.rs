use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use locode_api::{
    config::Config,
    domain::locode::repository::LocodeRepository,
    infrastructure::{
        ingest::loader::LocodeLoader, repositories::memory_locode_repository::MemoryLocodeRepository,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::{path::PathBuf, sync::Arc};
use tower::ServiceExt;

/// Distinct locodes across the three fixture files.
pub const FIXTURE_LOCODES: usize = 13;

pub struct TestApp {
    pub app: Router,
    pub locodes: Arc<dyn LocodeRepository>,
}

pub fn fixture_paths() -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    ["locode_1.csv", "locode_2.csv", "locode_3.csv"]
        .iter()
        .map(|f| dir.join(f))
        .collect()
}

fn build_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        locode_files: fixture_paths(),
        ..Config::default()
    }
}

pub fn spawn_app() -> TestApp {
    let config = build_config();
    let repo = LocodeLoader::new(config.locode_files.clone())
        .load()
        .expect("fixtures failed to load");
    spawn_app_with(Arc::new(repo), config)
}

pub fn spawn_empty_app() -> TestApp {
    spawn_app_with(Arc::new(MemoryLocodeRepository::new()), build_config())
}

fn spawn_app_with(locodes: Arc<dyn LocodeRepository>, config: Config) -> TestApp {
    let state = AppState::new(locodes.clone(), config);
    TestApp {
        app: create_router(state),
        locodes,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn content_type(res: &axum::response::Response) -> String {
    res.headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
