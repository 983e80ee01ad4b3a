use crate::{
    application::random_locodes::use_case::RandomLocodesUseCase,
    domain::shared::sampling::SampleRequest,
    presentation::http::{
        params::{QueryPairs, first_param},
        state::AppState,
    },
};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

/// `GET /random?count=<n>`
///
/// `count` is read as raw text so unusable values fall back to the default
/// instead of being rejected by the extractor.
pub async fn get_random(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> impl IntoResponse {
    let request =
        SampleRequest::from_raw(first_param(&params, "count"), state.config.random_default_count);
    let sample = RandomLocodesUseCase::new(state.locodes.clone()).execute(request, time_seed());

    tracing::debug!(
        requested = request.count,
        returned = sample.codes.len(),
        "Random locode sample"
    );

    (
        [(header::CONTENT_TYPE, "text/plain")],
        sample.to_plain_text(),
    )
}

fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}
