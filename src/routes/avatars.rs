use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;

#[instrument(skip(state))]
pub(crate) async fn get(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let groups = state.catalog_controller.avatars().await?;

    Ok(Json(groups))
}
