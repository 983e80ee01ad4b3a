use crate::{
    application::lookup_locode::use_case::LookupLocodeUseCase,
    domain::locode::entity::Location,
    presentation::http::{
        errors::AppError,
        params::{QueryPairs, first_param},
        state::AppState,
    },
};
use axum::{
    Json,
    extract::{Query, State},
};

/// `GET /locode?locode=<code>`
pub async fn get_locode(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Location>, AppError> {
    let code = first_param(&params, "locode").unwrap_or_default();
    let location = LookupLocodeUseCase::new(state.locodes.clone()).execute(code)?;
    tracing::debug!(locode = %location.locode, "Locode lookup hit");
    Ok(Json(location))
}
