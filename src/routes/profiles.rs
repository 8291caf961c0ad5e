use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::ProfileData;
use crate::types::user::Claim;
use crate::utils::validate::{Validated, parse_id};

#[instrument(skip_all, fields(user = user.id))]
pub(crate) async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<Claim>,
) -> Result<impl IntoResponse, Error> {
    let profiles = state.profile_controller.list(user.id).await?;

    Ok(Json(profiles))
}

#[instrument(skip(state, user), fields(user = user.id))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<Claim>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let profile = state.profile_controller.get(parse_id(&id)?).await?;

    Ok(Json(profile))
}

#[instrument(skip_all, fields(user = user.id))]
pub(crate) async fn post(
    State(state): State<AppState>,
    Extension(user): Extension<Claim>,
    Validated(params): Validated<ProfileData>,
) -> Result<impl IntoResponse, Error> {
    let profile = state.profile_controller.create(&user, params).await?;

    Ok(Json(profile))
}

#[instrument(skip(state, user, params), fields(user = user.id))]
pub(crate) async fn put(
    State(state): State<AppState>,
    Extension(user): Extension<Claim>,
    Path(id): Path<String>,
    Validated(params): Validated<ProfileData>,
) -> Result<impl IntoResponse, Error> {
    let id = parse_id(&id)?;
    let profile = state.profile_controller.update(&user, id, params).await?;

    Ok(Json(profile))
}

#[instrument(skip(state, user), fields(user = user.id))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<Claim>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state.profile_controller.delete(&user, parse_id(&id)?).await?;

    Ok(StatusCode::NO_CONTENT)
}
