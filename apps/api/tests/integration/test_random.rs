use super::helpers::{
    FIXTURE_LOCODES, content_type, expect_status, get, read_text, send, spawn_app,
};
use axum::http::StatusCode;
use std::collections::HashSet;

fn lines(body: &str) -> Vec<&str> {
    body.lines().collect()
}

#[tokio::test]
async fn returns_requested_number_of_distinct_known_codes() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, get("/random?count=5")).await,
        StatusCode::OK,
    )
    .await;
    assert!(content_type(&res).starts_with("text/plain"));

    let body = read_text(res).await;
    assert!(body.ends_with('\n'));

    let codes = lines(&body);
    assert_eq!(codes.len(), 5);
    assert_eq!(codes.iter().collect::<HashSet<_>>().len(), 5);
    for code in codes {
        assert!(app.locodes.get(code).is_some(), "{} not in store", code);
    }
}

#[tokio::test]
async fn default_count_is_clamped_to_store_size() {
    let app = spawn_app();

    for uri in [
        "/random",
        "/random?count=0",
        "/random?count=-1",
        "/random?count=abc",
        "/random?count=100000",
    ] {
        let res = expect_status(send(&app.app, get(uri)).await, StatusCode::OK).await;
        let body = read_text(res).await;
        assert_eq!(lines(&body).len(), FIXTURE_LOCODES, "uri {}", uri);
    }
}

#[tokio::test]
async fn full_sample_covers_every_code() {
    let app = spawn_app();

    let body = read_text(send(&app.app, get("/random")).await).await;
    let sampled: HashSet<String> = lines(&body).into_iter().map(String::from).collect();
    let stored: HashSet<String> = app.locodes.codes().into_iter().collect();
    assert_eq!(sampled, stored);
}

#[tokio::test]
async fn every_sampled_code_resolves_via_lookup() {
    let app = spawn_app();

    let body = read_text(send(&app.app, get("/random?count=8")).await).await;
    for code in lines(&body) {
        expect_status(
            send(&app.app, get(&format!("/locode?locode={}", code))).await,
            StatusCode::OK,
        )
        .await;
    }
}

#[tokio::test]
async fn repeated_count_uses_first_value() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, get("/random?count=3&count=4")).await,
        StatusCode::OK,
    )
    .await;
    let body = read_text(res).await;
    assert_eq!(lines(&body).len(), 3);
}
