use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::SignIn;
use crate::types::response;
use crate::utils::validate::Validated;

#[instrument(skip_all)]
pub(crate) async fn sign_in(
    State(state): State<AppState>,
    Validated(params): Validated<SignIn>,
) -> Result<Json<response::Token>, Error> {
    let token = state
        .user_controller
        .sign_in(&params.email, &params.password)
        .await?;

    Ok(Json(response::Token { token }))
}
