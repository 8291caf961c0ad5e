use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::utils::validate::parse_id;

#[instrument(skip(state))]
pub(crate) async fn banners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let banners = state.catalog_controller.banners().await?;

    Ok(Json(banners))
}

#[instrument(skip(state))]
pub(crate) async fn trail_offers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let offers = state.catalog_controller.trail_offers().await?;

    Ok(Json(offers))
}

#[instrument(skip(state))]
pub(crate) async fn trail_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let offer = state.catalog_controller.trail_offer(parse_id(&id)?).await?;

    Ok(Json(offer))
}
